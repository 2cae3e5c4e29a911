use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{
    MEAN_CEIL_SCALE, MEAN_DESCALE, MEAN_ROUND_SCALE, SUMMARY_SEPARATOR, VALUE_SEPARATOR,
};

/// Running aggregate for one city. `count` is at least 1 once an entry exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityStats {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: u64,
}

impl CityStats {
    #[inline]
    pub fn new(temperature: f64) -> Self {
        Self {
            min: temperature,
            max: temperature,
            sum: temperature,
            count: 1,
        }
    }

    #[inline]
    pub fn update(&mut self, temperature: f64) {
        self.min = f64::min(self.min, temperature);
        self.max = f64::max(self.max, temperature);
        self.sum += temperature;
        self.count += 1;
    }

    /// Unrounded arithmetic mean
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Mean as published in the summary.
    ///
    /// Two stages: round `sum / count` to seven decimal places (ties away from
    /// zero), then take the ceiling at one decimal place. This is not the same
    /// as rounding to one decimal: 1.0333 becomes 1.1 and -10.05 becomes -10.0.
    /// Reference outputs depend on these exact bytes. A ceiling that lands on
    /// zero yields `0.0`, never `-0.0`.
    pub fn rounded_mean(&self) -> f64 {
        let scaled = (self.mean() * MEAN_ROUND_SCALE).round();
        let mean = (scaled / MEAN_DESCALE).ceil() / MEAN_CEIL_SCALE;
        if mean == 0.0 {
            0.0
        } else {
            mean
        }
    }

    pub fn summarize(&self, city: impl Into<String>) -> CitySummary {
        CitySummary {
            city: city.into(),
            min: self.min,
            mean: self.rounded_mean(),
            max: self.max,
        }
    }
}

/// One output row: `CITY=MIN/MEAN/MAX`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySummary {
    pub city: String,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl fmt::Display for CitySummary {
    // min/max print as the shortest round-trip decimal (always with a fraction),
    // mean with exactly one decimal place
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:?}{}{:.1}{}{:?}",
            self.city,
            SUMMARY_SEPARATOR,
            self.min,
            VALUE_SEPARATOR,
            self.mean,
            VALUE_SEPARATOR,
            self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_of(values: &[f64]) -> CityStats {
        let mut stats = CityStats::new(values[0]);
        for &value in &values[1..] {
            stats.update(value);
        }
        stats
    }

    #[test]
    fn test_update_tracks_extremes() {
        let stats = stats_of(&[12.0, 10.0, 15.5, -3.2]);
        assert_eq!(stats.min, -3.2);
        assert_eq!(stats.max, 15.5);
        assert_eq!(stats.count, 4);
        assert!((stats.sum - 34.3).abs() < 1e-9);
    }

    #[test]
    fn test_single_value() {
        let stats = CityStats::new(18.0);
        assert_eq!(stats.min, 18.0);
        assert_eq!(stats.max, 18.0);
        assert_eq!(stats.rounded_mean(), 18.0);
        assert_eq!(stats.summarize("Berlin").to_string(), "Berlin=18.0/18.0/18.0");
    }

    #[test]
    fn test_exact_mean_is_stable() {
        let stats = stats_of(&[12.0, 10.0]);
        assert_eq!(stats.rounded_mean(), 11.0);
    }

    #[test]
    fn test_mean_rounds_up_not_to_nearest() {
        // 1.0333... rounds to 1.0 conventionally, the ceiling stage gives 1.1
        let stats = stats_of(&[1.0, 1.0, 1.1]);
        assert_eq!(stats.rounded_mean(), 1.1);

        let stats = stats_of(&[1.0, 1.1, 1.1]);
        assert_eq!(stats.rounded_mean(), 1.1);
    }

    #[test]
    fn test_half_way_means() {
        let stats = stats_of(&[10.0, 10.1]);
        assert_eq!(stats.rounded_mean(), 10.1);

        // Ceiling moves negative halves toward zero
        let stats = stats_of(&[-10.0, -10.1]);
        assert_eq!(stats.rounded_mean(), -10.0);
    }

    #[test]
    fn test_mean_lifted_to_zero_is_unsigned() {
        let stats = stats_of(&[-0.1, 0.0]);
        assert!(stats.rounded_mean().is_sign_positive());
        assert_eq!(stats.summarize("X").to_string(), "X=-0.1/0.0/0.0");

        let stats = CityStats::new(-0.04);
        assert!(stats.rounded_mean().is_sign_positive());
        assert_eq!(stats.summarize("Y").to_string(), "Y=-0.04/0.0/-0.04");
    }

    #[test]
    fn test_float_noise_absorbed_by_first_stage() {
        // 0.1 + 0.2 != 0.3 in binary; the seven-digit rounding hides it
        let stats = stats_of(&[0.1, 0.2, 0.3, 0.2]);
        assert_eq!(stats.rounded_mean(), 0.2);
    }

    #[test]
    fn test_mean_within_extremes() {
        let stats = stats_of(&[-99.0, 98.9, 3.3, 45.1, -12.7]);
        let mean = stats.rounded_mean();
        assert!(stats.min <= mean && mean <= stats.max);
    }

    #[test]
    fn test_summary_format() {
        let summary = stats_of(&[12.0, 10.0]).summarize("Hamburg");
        assert_eq!(summary.to_string(), "Hamburg=10.0/11.0/12.0");

        let summary = stats_of(&[-5.3, -0.4]).summarize("Oslo");
        assert_eq!(summary.to_string(), "Oslo=-5.3/-2.8/-0.4");
    }

    #[test]
    fn test_summary_keeps_parsed_precision() {
        let summary = stats_of(&[10.25, 3.0]).summarize("Pune");
        assert_eq!(summary.to_string(), "Pune=3.0/6.7/10.25");
    }
}
