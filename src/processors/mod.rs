pub mod aggregator;
pub mod output_checker;

pub use aggregator::{Aggregator, Ingest, RunReport};
pub use output_checker::{CheckReport, Mismatch, OutputChecker};
