use crate::domain::model::Name;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait NameParser: Send + Sync {
    fn parse(&self, line: &str) -> Result<Name>;

    fn try_parse(&self, line: &str) -> Option<Name> {
        match self.parse(line) {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!("Discarding unparseable name '{}': {}", line, e);
                None
            }
        }
    }
}

pub trait NameSorter: Send + Sync {
    /// Returns a newly ordered copy; `names` is left untouched.
    fn sort(&self, names: &[Name]) -> Vec<Name>;
}

#[async_trait]
pub trait NameReader: Send + Sync {
    async fn read(&self) -> Result<Vec<Name>>;
}

#[async_trait]
pub trait NameWriter: Send + Sync {
    async fn write(&self, names: &[Name]) -> Result<()>;

    /// Human-readable label for logs, e.g. `stdout` or a file path.
    fn destination(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn console_output(&self) -> bool;
}
