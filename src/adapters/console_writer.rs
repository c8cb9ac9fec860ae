use crate::core::{Name, NameWriter};
use crate::utils::error::{NameSorterError, Result};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

/// Writes one full name per line to a `Write` sink, stdout unless another sink is supplied.
pub struct ConsoleNameWriter<W: Write + Send = std::io::Stdout> {
    output: Mutex<W>,
}

impl ConsoleNameWriter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl Default for ConsoleNameWriter<std::io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleNameWriter<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    pub fn into_inner(self) -> W {
        match self.output.into_inner() {
            Ok(output) => output,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> NameWriter for ConsoleNameWriter<W> {
    async fn write(&self, names: &[Name]) -> Result<()> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| NameSorterError::Io(std::io::Error::other("console writer lock poisoned")))?;

        for name in names {
            writeln!(output, "{}", name.full_name())?;
        }
        output.flush()?;

        Ok(())
    }

    fn destination(&self) -> String {
        "console".to_string()
    }
}
