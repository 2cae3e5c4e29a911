pub mod city_stats;
pub mod record;

pub use city_stats::{CityStats, CitySummary};
pub use record::Record;
