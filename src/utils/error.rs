use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameSorterError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Parse error: {message}")]
    Parse { input: String, message: String },

    #[error("The input file was not found: {path}")]
    SourceNotFound { path: String },

    #[error("Failed to read '{path}': {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse name on line {line_number}: '{line}'. {source}")]
    LineParse {
        line_number: usize,
        line: String,
        #[source]
        source: Box<NameSorterError>,
    },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration file error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input file is missing or unreadable.
    Input,
    /// A name failed validation or parsing.
    Data,
    Configuration,
    /// A writer could not deliver the sorted names.
    Output,
}

impl NameSorterError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn parse(input: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } | Self::Parse { .. } | Self::LineParse { .. } => {
                ErrorCategory::Data
            }
            Self::SourceNotFound { .. } | Self::SourceRead { .. } => ErrorCategory::Input,
            Self::InvalidArgument { .. } | Self::ConfigParse { .. } => {
                ErrorCategory::Configuration
            }
            Self::Io(_) => ErrorCategory::Output,
        }
    }

    /// Process exit code for the binary. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Data | ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Output => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::SourceNotFound { path } => {
                format!("Check that '{}' exists and the path is spelled correctly", path)
            }
            Self::SourceRead { path, .. } => {
                format!("Check that '{}' is a readable UTF-8 text file", path)
            }
            Self::LineParse { line_number, .. } => format!(
                "Fix line {} so it holds 1 to 3 given names followed by a last name",
                line_number
            ),
            Self::Validation { .. } | Self::Parse { .. } => {
                "Names must have 1 to 3 given names followed by a last name".to_string()
            }
            Self::InvalidArgument { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            Self::ConfigParse { .. } => "Check the TOML syntax of the config file".to_string(),
            Self::Io(_) => "Check file permissions and available disk space".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read names: {}", self),
            ErrorCategory::Data => format!("Invalid name data: {}", self),
            ErrorCategory::Configuration => format!("Bad configuration: {}", self),
            ErrorCategory::Output => format!("Could not write sorted names: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, NameSorterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_parse_message_names_line() {
        let err = NameSorterError::LineParse {
            line_number: 3,
            line: "Smith".to_string(),
            source: Box::new(NameSorterError::parse("Smith", "too few parts")),
        };

        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("'Smith'"));
        assert!(message.contains("too few parts"));
        assert_eq!(err.category(), ErrorCategory::Data);
    }

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errors = [
            NameSorterError::validation("bad"),
            NameSorterError::SourceNotFound {
                path: "missing.txt".to_string(),
            },
            NameSorterError::ConfigParse {
                message: "expected a table".to_string(),
            },
            NameSorterError::Io(std::io::Error::other("disk full")),
        ];

        for err in &errors {
            assert_ne!(err.exit_code(), 0, "{}", err);
        }
    }

    #[test]
    fn test_recovery_suggestion_mentions_path() {
        let err = NameSorterError::SourceNotFound {
            path: "names.txt".to_string(),
        };
        assert!(err.recovery_suggestion().contains("names.txt"));
        assert!(err.user_friendly_message().starts_with("Could not read names"));
    }

    #[test]
    fn test_read_failure_is_an_input_error() {
        let err = NameSorterError::SourceRead {
            path: "names.txt".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("Failed to read 'names.txt'"));
    }
}
