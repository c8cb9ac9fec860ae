use crate::core::{Name, NameParser};
use crate::domain::model::{MAX_GIVEN_NAMES, MIN_GIVEN_NAMES};
use crate::utils::error::{NameSorterError, Result};

const MIN_NAME_PARTS: usize = 2;

/// Splits a line on spaces: every token but the last is a given name, the last is the last name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceDelimitedParser;

impl SpaceDelimitedParser {
    pub fn new() -> Self {
        Self
    }

    fn split_into_parts(full_name: &str) -> Vec<&str> {
        full_name
            .split(' ')
            .filter(|part| !part.is_empty())
            .map(str::trim)
            .collect()
    }

    fn validate_parts_count(parts: &[&str], full_name: &str) -> Result<()> {
        if parts.len() < MIN_NAME_PARTS {
            return Err(NameSorterError::parse(
                full_name,
                format!(
                    "Name must have at least one given name and a last name. Got: '{}'",
                    full_name
                ),
            ));
        }

        let given_count = parts.len() - 1;
        if !(MIN_GIVEN_NAMES..=MAX_GIVEN_NAMES).contains(&given_count) {
            return Err(NameSorterError::parse(
                full_name,
                format!(
                    "Name must have between {} and {} given names. Got {} in: '{}'",
                    MIN_GIVEN_NAMES, MAX_GIVEN_NAMES, given_count, full_name
                ),
            ));
        }

        Ok(())
    }
}

impl NameParser for SpaceDelimitedParser {
    fn parse(&self, line: &str) -> Result<Name> {
        if line.trim().is_empty() {
            return Err(NameSorterError::parse(
                line,
                "Full name cannot be empty or whitespace.",
            ));
        }

        let parts = Self::split_into_parts(line);
        Self::validate_parts_count(&parts, line)?;

        let (last_name, given_names) = match parts.split_last() {
            Some(split) => split,
            None => return Err(NameSorterError::parse(line, "Name has no parts.")),
        };

        Name::new(given_names.iter().copied(), last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> SpaceDelimitedParser {
        SpaceDelimitedParser::new()
    }

    #[test]
    fn test_parse_two_to_four_tokens() {
        let cases = [
            ("John Smith", vec!["John"], "Smith"),
            ("John Michael Smith", vec!["John", "Michael"], "Smith"),
            (
                "Hunter Uriah Mathew Clarke",
                vec!["Hunter", "Uriah", "Mathew"],
                "Clarke",
            ),
        ];

        for (input, given, last) in cases {
            let name = parser().parse(input).unwrap();
            assert_eq!(name.given_names(), given.as_slice(), "{}", input);
            assert_eq!(name.last_name(), last);
            assert_eq!(name.full_name(), input);
        }
    }

    #[test]
    fn test_parse_rejects_single_token() {
        let err = parser().parse("Smith").unwrap_err();
        assert!(matches!(err, NameSorterError::Parse { .. }));
        assert!(err.to_string().contains("at least one given name"));
    }

    #[test]
    fn test_parse_rejects_five_tokens() {
        let err = parser().parse("A B C D Smith").unwrap_err();
        assert!(matches!(err, NameSorterError::Parse { .. }));
        assert!(err.to_string().contains("Got 4"));
    }

    #[test]
    fn test_parse_rejects_blank() {
        for input in ["", "   ", "\t"] {
            assert!(
                matches!(parser().parse(input), Err(NameSorterError::Parse { .. })),
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_collapses_spaces() {
        let spaced = parser().parse("  John   Smith  ").unwrap();
        let plain = parser().parse("John Smith").unwrap();

        assert_eq!(spaced, plain);
        assert_eq!(spaced.given_names(), plain.given_names());
        assert_eq!(spaced.last_name(), "Smith");
    }

    #[test]
    fn test_tab_is_not_a_delimiter() {
        let name = parser().parse("John\tPaul Smith").unwrap();
        assert_eq!(name.given_names(), ["John\tPaul"]);
    }

    #[test]
    fn test_token_trimming_to_empty_fails_validation() {
        let err = parser().parse("John \t Smith").unwrap_err();
        assert!(matches!(err, NameSorterError::Validation { .. }));
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(
            parser().try_parse("Jane Doe").map(|n| n.full_name().to_string()),
            Some("Jane Doe".to_string())
        );
        assert!(parser().try_parse("Doe").is_none());
        assert!(parser().try_parse("").is_none());
    }
}
