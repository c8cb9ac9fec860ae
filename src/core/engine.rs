use crate::core::{NameReader, NameSorter, NameWriter};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub writers: usize,
}

/// Reads every name, sorts them, then hands the sorted list to each writer in order.
///
/// Writers run one after another; the first failure stops the run.
pub struct NameSorterEngine<R: NameReader, S: NameSorter> {
    reader: R,
    sorter: S,
    writers: Vec<Box<dyn NameWriter>>,
}

impl<R: NameReader, S: NameSorter> NameSorterEngine<R, S> {
    pub fn new(reader: R, sorter: S, writers: Vec<Box<dyn NameWriter>>) -> Self {
        Self {
            reader,
            sorter,
            writers,
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting name sort");

        tracing::info!("Reading names...");
        let names = self.reader.read().await?;
        tracing::info!("Read {} names", names.len());

        let sorted = self.sorter.sort(&names);
        tracing::debug!("Sorted {} names", sorted.len());

        for writer in &self.writers {
            tracing::debug!("Writing to {}", writer.destination());
            writer.write(&sorted).await?;
        }
        tracing::info!("Wrote sorted names to {} destinations", self.writers.len());

        Ok(RunSummary {
            records: sorted.len(),
            writers: self.writers.len(),
        })
    }
}
