use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggregationError>;

#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed line {line_number}: expected '<city>;<temperature>', got '{line}'")]
    MalformedLine { line_number: usize, line: String },

    #[error("Invalid temperature on line {line_number}: '{value}'")]
    InvalidTemperature { line_number: usize, value: String },

    #[error("Invalid UTF-8 in input: {0}")]
    InvalidUtf8(String),
}

impl AggregationError {
    /// True for errors caused by the input content rather than the file system
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            AggregationError::MalformedLine { .. }
                | AggregationError::InvalidTemperature { .. }
                | AggregationError::InvalidUtf8(_)
        )
    }
}
