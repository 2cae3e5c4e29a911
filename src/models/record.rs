use serde::{Deserialize, Serialize};

use crate::error::{AggregationError, Result};
use crate::utils::constants::FIELD_SEPARATOR;

/// One `city;temperature` measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub city: String,
    pub temperature: f64,
}

impl Record {
    pub fn new(city: impl Into<String>, temperature: f64) -> Self {
        Self {
            city: city.into(),
            temperature,
        }
    }

    /// Parse a non-blank input line. `line_number` is 1-based and only used in errors.
    pub fn parse(line: &str, line_number: usize) -> Result<Self> {
        let trimmed = line.trim();
        let mut parts = trimmed.split(FIELD_SEPARATOR);

        let (city, temp_str) = match (parts.next(), parts.next(), parts.next()) {
            (Some(city), Some(temp), None) => (city, temp),
            _ => {
                return Err(AggregationError::MalformedLine {
                    line_number,
                    line: trimmed.to_string(),
                })
            }
        };

        let temperature = parse_temperature(temp_str).ok_or_else(|| {
            AggregationError::InvalidTemperature {
                line_number,
                value: temp_str.to_string(),
            }
        })?;

        Ok(Self::new(city, temperature))
    }
}

fn parse_temperature(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let record = Record::parse("Hamburg;12.0", 1).unwrap();
        assert_eq!(record.city, "Hamburg");
        assert_eq!(record.temperature, 12.0);

        let record = Record::parse("  Rostov-on-Don;-8.7\r\n", 2).unwrap();
        assert_eq!(record.city, "Rostov-on-Don");
        assert_eq!(record.temperature, -8.7);
    }

    #[test]
    fn test_parse_keeps_inner_city_text() {
        let record = Record::parse("South Dumdum;3.4", 1).unwrap();
        assert_eq!(record.city, "South Dumdum");

        let record = Record::parse("Sangli-Miraj-&-Kupwad; 21.5", 1).unwrap();
        assert_eq!(record.city, "Sangli-Miraj-&-Kupwad");
        assert_eq!(record.temperature, 21.5);
    }

    #[test]
    fn test_parse_integer_temperature() {
        let record = Record::parse("Delhi;35", 1).unwrap();
        assert_eq!(record.temperature, 35.0);
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        let err = Record::parse("NoSemicolonHere", 7).unwrap_err();
        match err {
            AggregationError::MalformedLine { line_number, line } => {
                assert_eq!(line_number, 7);
                assert_eq!(line, "NoSemicolonHere");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_field_is_malformed() {
        let err = Record::parse("Berlin;1.0;2.0", 3).unwrap_err();
        assert!(matches!(err, AggregationError::MalformedLine { line_number: 3, .. }));
    }

    #[test]
    fn test_non_numeric_temperature() {
        let err = Record::parse("Berlin;warm", 4).unwrap_err();
        match err {
            AggregationError::InvalidTemperature { line_number, value } => {
                assert_eq!(line_number, 4);
                assert_eq!(value, "warm");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(Record::parse("Berlin;", 5).is_err());
        assert!(Record::parse("Berlin;nan", 6).is_err());
        assert!(Record::parse("Berlin;inf", 7).is_err());
    }
}
