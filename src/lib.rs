pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ConsoleNameWriter, FileNameReader, FileNameWriter};
pub use config::{AppConfig, DEFAULT_OUTPUT_FILE_NAME};
pub use self::core::{
    engine::{NameSorterEngine, RunSummary},
    parser::SpaceDelimitedParser,
    sorter::LastNameFirstSorter,
    Name, NameParser, NameReader, NameSorter, NameWriter,
};
pub use utils::error::{NameSorterError, Result};
