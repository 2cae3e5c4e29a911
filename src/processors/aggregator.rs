use crate::error::Result;
use crate::models::{CityStats, CitySummary, Record};
use crate::readers::RecordReader;
use crate::utils::constants::{DEFAULT_CITY_CAPACITY, PROGRESS_INTERVAL};
use crate::utils::progress::ProgressReporter;
use crate::writers::SummaryWriter;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of feeding one raw line to the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingest {
    Recorded,
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub records: usize,
    pub cities: usize,
    pub reached_sentinel: bool,
}

impl RunReport {
    pub fn summary(&self) -> String {
        format!(
            "Aggregated {} records into {} cities{}",
            self.records,
            self.cities,
            if self.reached_sentinel {
                " (stopped at blank line)"
            } else {
                ""
            }
        )
    }
}

/// Per-city statistics table. Entries are created on first sighting and never removed.
pub struct Aggregator {
    table: HashMap<String, CityStats>,
    records: usize,
    use_mmap: bool,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            table: HashMap::with_capacity(DEFAULT_CITY_CAPACITY),
            records: 0,
            use_mmap: false,
        }
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    pub fn ingest(&mut self, record: Record) {
        self.records += 1;
        if let Some(stats) = self.table.get_mut(&record.city) {
            stats.update(record.temperature);
        } else {
            self.table
                .insert(record.city, CityStats::new(record.temperature));
        }
    }

    /// Feed one raw line; a blank line signals end of input
    pub fn ingest_line(&mut self, line: &str, line_number: usize) -> Result<Ingest> {
        if line.trim().is_empty() {
            return Ok(Ingest::EndOfInput);
        }
        self.ingest(Record::parse(line, line_number)?);
        Ok(Ingest::Recorded)
    }

    /// Ingest records until the iterator ends; stops at the first error
    pub fn ingest_all<I>(&mut self, records: I, progress: Option<&ProgressReporter>) -> Result<usize>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        let mut ingested = 0;
        for record in records {
            self.ingest(record?);
            ingested += 1;

            if ingested % PROGRESS_INTERVAL == 0 {
                if let Some(p) = progress {
                    p.increment(PROGRESS_INTERVAL as u64);
                }
            }
        }

        if let Some(p) = progress {
            p.increment((ingested % PROGRESS_INTERVAL) as u64);
        }
        Ok(ingested)
    }

    pub fn get(&self, city: &str) -> Option<&CityStats> {
        self.table.get(city)
    }

    pub fn city_count(&self) -> usize {
        self.table.len()
    }

    pub fn record_count(&self) -> usize {
        self.records
    }

    /// One summary per city, ascending by city name
    pub fn finalize(&self) -> Vec<CitySummary> {
        let mut cities: Vec<&String> = self.table.keys().collect();
        cities.sort_unstable();

        cities
            .into_iter()
            .map(|city| self.table[city].summarize(city.as_str()))
            .collect()
    }

    /// Aggregate `input` and write the summary to `output`.
    ///
    /// The output file is created before the input is read, so an unwritable
    /// destination fails fast and a format error leaves an empty file behind.
    pub fn run(
        mut self,
        input: &Path,
        output: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<RunReport> {
        let writer = SummaryWriter::new();
        let out = writer.create(output)?;
        info!(input = %input.display(), output = %output.display(), "aggregating");

        if let Some(p) = progress {
            p.set_message("Reading measurements...");
        }

        let mut records = RecordReader::with_mmap(self.use_mmap).stream_records(input)?;
        let ingested = self.ingest_all(&mut records, progress)?;
        let reached_sentinel = records.reached_sentinel();
        debug!(records = ingested, lines = records.lines_read(), "input consumed");

        if let Some(p) = progress {
            p.set_message("Writing summary...");
        }

        let summaries = self.finalize();
        writer.write_summaries(&summaries, out)?;

        let report = RunReport {
            records: self.records,
            cities: summaries.len(),
            reached_sentinel,
        };

        if let Some(p) = progress {
            p.finish_with_message(&report.summary());
        }
        info!(records = report.records, cities = report.cities, "aggregation complete");

        Ok(report)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
