use name_sorter::{FileNameReader, Name, NameReader, NameSorterError, SpaceDelimitedParser};
use tempfile::TempDir;

async fn read(content: &str) -> Result<Vec<Name>, NameSorterError> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("names.txt");
    tokio::fs::write(&path, content).await.unwrap();

    FileNameReader::new(&path, SpaceDelimitedParser::new())
        .read()
        .await
}

#[tokio::test]
async fn test_reads_names_in_file_order() {
    let names = read("John Smith\nJane Doe").await.unwrap();

    assert_eq!(names.len(), 2);
    assert_eq!(names[0].full_name(), "John Smith");
    assert_eq!(names[1].full_name(), "Jane Doe");
}

#[tokio::test]
async fn test_skips_empty_lines() {
    let names = read("John Smith\n\n\nJane Doe\n").await.unwrap();
    assert_eq!(names.len(), 2);
}

#[tokio::test]
async fn test_empty_file_yields_no_names() {
    assert!(read("").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_single_word_reports_line_one() {
    let err = read("Smith").await.unwrap_err();

    assert!(err.to_string().contains("line 1"));
    assert!(matches!(err, NameSorterError::LineParse { line_number: 1, .. }));
}

#[tokio::test]
async fn test_too_many_given_names_reports_line() {
    let err = read("John Smith\nA B C D Smith\n").await.unwrap_err();

    match err {
        NameSorterError::LineParse {
            line_number, line, ..
        } => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "A B C D Smith");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();
    let reader = FileNameReader::new(
        temp_dir.path().join("nonexistent.txt"),
        SpaceDelimitedParser::new(),
    );

    let err = reader.read().await.unwrap_err();

    assert!(matches!(err, NameSorterError::SourceNotFound { .. }));
}

#[tokio::test]
async fn test_sample_file_keeps_input_order() {
    let names = read(
        "Janet Parsons\nVaughn Lewis\nAdonis Julius Archer\nShelby Nathan Yoder\nMarin Alvarez\n\
         London Lindsey\nBeau Tristan Bentley\nLeo Gardner\nHunter Uriah Mathew Clarke\n\
         Mikayla Lopez\nFrankie Conner Ritter",
    )
    .await
    .unwrap();

    assert_eq!(names.len(), 11);
    assert_eq!(names[0].full_name(), "Janet Parsons");
    assert_eq!(names[8].full_name(), "Hunter Uriah Mathew Clarke");
    assert_eq!(names[8].given_names(), ["Hunter", "Uriah", "Mathew"]);
}

#[tokio::test]
async fn test_classic_mac_line_endings() {
    let names = read("John Smith\rJane Doe\r").await.unwrap();

    assert_eq!(names.len(), 2);
    assert_eq!(names[0].full_name(), "John Smith");
    assert_eq!(names[1].full_name(), "Jane Doe");
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_path_is_not_reported_missing() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("plain.txt");
    std::fs::write(&file, "John Smith\n").unwrap();
    // a regular file used as a directory fails with ENOTDIR rather than NotFound
    let reader = FileNameReader::new(file.join("names.txt"), SpaceDelimitedParser::new());

    let err = reader.read().await.unwrap_err();

    assert!(matches!(err, NameSorterError::SourceRead { .. }), "{err:?}");
}
