pub mod engine;
pub mod parser;
pub mod sorter;

pub use crate::domain::model::Name;
pub use crate::domain::ports::{ConfigProvider, NameParser, NameReader, NameSorter, NameWriter};
pub use crate::utils::error::Result;
