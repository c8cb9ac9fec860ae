use crate::core::{Name, NameWriter};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes one full name per line to a file, replacing any existing content.
#[derive(Debug, Clone)]
pub struct FileNameWriter {
    path: PathBuf,
}

impl FileNameWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NameWriter for FileNameWriter {
    async fn write(&self, names: &[Name]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content: String = names
            .iter()
            .map(|name| format!("{}\n", name.full_name()))
            .collect();

        tokio::fs::write(&self.path, content).await?;
        tracing::debug!("Wrote {} names to {}", names.len(), self.path.display());

        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}
