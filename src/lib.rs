pub mod cli;
pub mod error;
pub mod generators;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{AggregationError, Result};
pub use processors::{Aggregator, RunReport};
