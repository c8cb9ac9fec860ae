#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "sorted-names-list.txt";

/// Settings after merging the command line, the optional TOML file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub input_path: String,
    pub output_path: String,
    pub console_output: bool,
    pub log_directive: Option<String>,
}

impl AppConfig {
    /// Command-line values win over the file, the file wins over defaults.
    pub fn resolve(input_path: String, output_path: Option<String>, file: Option<&TomlConfig>) -> Self {
        let output_path = output_path
            .or_else(|| file.and_then(|f| f.output_path()).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE_NAME.to_string());

        Self {
            input_path,
            output_path,
            console_output: file.and_then(TomlConfig::console_output).unwrap_or(true),
            log_directive: file.and_then(|f| f.log_level()).map(str::to_string),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn console_output(&self) -> bool {
        self.console_output
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_distinct_paths("output_path", &self.input_path, &self.output_path)?;
        Ok(())
    }
}
