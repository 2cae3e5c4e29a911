use crate::error::Result;
use crate::models::CitySummary;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes `CITY=MIN/MEAN/MAX` lines, one per city, in the order given
pub struct SummaryWriter {
    buffer_size: usize,
}

impl SummaryWriter {
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Create (or truncate) the output file
    pub fn create(&self, path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path)?;
        Ok(BufWriter::with_capacity(self.buffer_size, file))
    }

    pub fn write_summaries<W: Write>(&self, summaries: &[CitySummary], mut out: W) -> Result<()> {
        for summary in summaries {
            writeln!(out, "{}", summary)?;
        }
        out.flush()?;
        debug!(cities = summaries.len(), "summary written");
        Ok(())
    }

    pub fn write_to_path(&self, summaries: &[CitySummary], path: &Path) -> Result<()> {
        let out = self.create(path)?;
        self.write_summaries(summaries, out)
    }

    /// Render the summary in memory
    pub fn render(&self, summaries: &[CitySummary]) -> String {
        summaries
            .iter()
            .map(|summary| format!("{}\n", summary))
            .collect()
    }
}

impl Default for SummaryWriter {
    fn default() -> Self {
        Self::new()
    }
}
