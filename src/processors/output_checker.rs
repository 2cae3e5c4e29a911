use crate::error::Result;
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, SUMMARY_SEPARATOR, VALUE_EPSILON, VALUE_SEPARATOR};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    CityCount { expected: usize, actual: usize },
    MalformedExpected(String),
    MalformedOutput(String),
    OutOfOrder { city: String, expected: usize, actual: usize },
    MissingCity(String),
    UnexpectedCity(String),
    ValueCount { city: String, expected: usize, actual: usize },
    Value { city: String, position: usize, expected: f64, actual: f64 },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::CityCount { expected, actual } => write!(
                f,
                "Number of cities mismatch: expected {} cities, got {}",
                expected, actual
            ),
            Mismatch::MalformedExpected(line) => write!(f, "Malformed line in expected output: {}", line),
            Mismatch::MalformedOutput(line) => write!(f, "Malformed line in output: {}", line),
            Mismatch::OutOfOrder { city, expected, actual } => write!(
                f,
                "City '{}' is out of order: expected at position {}, found at position {}",
                city, expected, actual
            ),
            Mismatch::MissingCity(city) => write!(f, "Missing city {} in output", city),
            Mismatch::UnexpectedCity(city) => write!(f, "Unexpected city {} in output", city),
            Mismatch::ValueCount { city, expected, actual } => write!(
                f,
                "Number of values mismatch for city {}: expected {}, got {}",
                city, expected, actual
            ),
            Mismatch::Value { city, position, expected, actual } => write!(
                f,
                "Value mismatch for city {} at position {}: expected {}, got {}",
                city, position, expected, actual
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub cities_checked: usize,
    pub mismatch: Option<Mismatch>,
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        self.mismatch.is_none()
    }

    pub fn summary(&self) -> String {
        match &self.mismatch {
            None => format!("All {} cities match the expected output", self.cities_checked),
            Some(mismatch) => mismatch.to_string(),
        }
    }
}

/// Compares a produced summary against expected lines, city by city.
/// Numeric values are compared with a small tolerance; blank output lines are ignored.
pub struct OutputChecker {
    epsilon: f64,
}

struct SummaryLine<'a> {
    city: &'a str,
    values: &'a str,
}

impl<'a> SummaryLine<'a> {
    fn split(line: &'a str) -> Option<Self> {
        let mut parts = line.split(SUMMARY_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(city), Some(values), None) => Some(Self { city, values }),
            _ => None,
        }
    }

    fn parse_values(&self) -> Option<Vec<f64>> {
        self.values
            .split(VALUE_SEPARATOR)
            .map(|v| v.trim().parse::<f64>().ok())
            .collect()
    }
}

impl OutputChecker {
    pub fn new() -> Self {
        Self {
            epsilon: VALUE_EPSILON,
        }
    }

    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Check the file at `path` against `expected`
    pub fn check_file(&self, expected: &[String], path: &Path) -> Result<CheckReport> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut actual = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                actual.push(line);
            }
        }

        Ok(self.check_lines(expected, &actual))
    }

    pub fn check_lines(&self, expected: &[String], actual: &[String]) -> CheckReport {
        let mismatch = self.find_mismatch(expected, actual);
        CheckReport {
            cities_checked: expected.len(),
            mismatch,
        }
    }

    fn find_mismatch(&self, expected: &[String], actual: &[String]) -> Option<Mismatch> {
        if expected.len() != actual.len() {
            return Some(Mismatch::CityCount {
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        let mut actual_lines = Vec::with_capacity(actual.len());
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(actual.len());
        for (position, line) in actual.iter().enumerate() {
            let Some(parsed) = SummaryLine::split(line) else {
                return Some(Mismatch::MalformedOutput(line.clone()));
            };
            positions.insert(parsed.city, position);
            actual_lines.push(parsed);
        }

        let mut expected_cities = HashSet::with_capacity(expected.len());
        for (expected_pos, line) in expected.iter().enumerate() {
            let Some(expected_line) = SummaryLine::split(line) else {
                return Some(Mismatch::MalformedExpected(line.clone()));
            };
            let Some(expected_values) = expected_line.parse_values() else {
                return Some(Mismatch::MalformedExpected(line.clone()));
            };
            let city = expected_line.city;
            expected_cities.insert(city);

            let Some(&actual_pos) = positions.get(city) else {
                return Some(Mismatch::MissingCity(city.to_string()));
            };
            if actual_pos != expected_pos {
                return Some(Mismatch::OutOfOrder {
                    city: city.to_string(),
                    expected: expected_pos,
                    actual: actual_pos,
                });
            }

            let Some(actual_values) = actual_lines[actual_pos].parse_values() else {
                return Some(Mismatch::MalformedOutput(actual[actual_pos].clone()));
            };
            if actual_values.len() != expected_values.len() {
                return Some(Mismatch::ValueCount {
                    city: city.to_string(),
                    expected: expected_values.len(),
                    actual: actual_values.len(),
                });
            }

            for (position, (&actual, &expected)) in
                actual_values.iter().zip(expected_values.iter()).enumerate()
            {
                if (actual - expected).abs() > self.epsilon {
                    return Some(Mismatch::Value {
                        city: city.to_string(),
                        position,
                        expected,
                        actual,
                    });
                }
            }
        }

        actual_lines
            .iter()
            .find(|line| !expected_cities.contains(line.city))
            .map(|line| Mismatch::UnexpectedCity(line.city.to_string()))
    }
}

impl Default for OutputChecker {
    fn default() -> Self {
        Self::new()
    }
}
