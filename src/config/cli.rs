use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "name-sorter")]
#[command(about = "Sorts a list of names by last name, then given names")]
pub struct CliConfig {
    /// File with one name per line
    pub input_path: String,

    /// Where the sorted list is written [default: sorted-names-list.txt]
    #[arg(long)]
    pub output_path: Option<String>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        Ok(AppConfig::resolve(
            self.input_path.clone(),
            self.output_path.clone(),
            file.as_ref(),
        ))
    }
}
