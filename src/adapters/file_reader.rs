use crate::core::{Name, NameParser, NameReader};
use crate::utils::error::{NameSorterError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads one name per line from a text file. Blank lines are skipped.
///
/// The first line that fails to parse aborts the read with its 1-based line number.
#[derive(Debug, Clone)]
pub struct FileNameReader<P: NameParser> {
    path: PathBuf,
    parser: P,
}

impl<P: NameParser> FileNameReader<P> {
    pub fn new(path: impl Into<PathBuf>, parser: P) -> Self {
        Self {
            path: path.into(),
            parser,
        }
    }

    fn parse_lines(&self, content: &str) -> Result<Vec<Name>> {
        let mut names = Vec::new();

        for (index, line) in split_lines(content).into_iter().enumerate() {
            let line_number = index + 1;

            if line.trim().is_empty() {
                continue;
            }

            let name = self
                .parser
                .parse(line)
                .map_err(|e| NameSorterError::LineParse {
                    line_number,
                    line: line.to_string(),
                    source: Box::new(e),
                })?;
            names.push(name);
        }

        Ok(names)
    }
}

#[async_trait]
impl<P: NameParser> NameReader for FileNameReader<P> {
    async fn read(&self) -> Result<Vec<Name>> {
        let display_path = self.path.display().to_string();

        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => {}
            Ok(false) => return Err(NameSorterError::SourceNotFound { path: display_path }),
            Err(source) => {
                return Err(NameSorterError::SourceRead {
                    path: display_path,
                    source,
                })
            }
        }

        tracing::debug!("Reading names from {}", display_path);
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| NameSorterError::SourceRead {
                path: display_path,
                source,
            })?;

        self.parse_lines(&content)
    }
}

/// Splits on `\r\n`, `\r` or `\n`. A terminator at the very end does not start another line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator_len..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}
