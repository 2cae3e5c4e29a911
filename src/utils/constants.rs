/// Default file names
pub const DEFAULT_INPUT_FILE: &str = "testcase.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Record format
pub const FIELD_SEPARATOR: char = ';';
pub const SUMMARY_SEPARATOR: char = '=';
pub const VALUE_SEPARATOR: char = '/';

/// Mean rounding: round at this scale first, then ceil at `MEAN_CEIL_SCALE`
pub const MEAN_ROUND_SCALE: f64 = 10_000_000.0;
pub const MEAN_DESCALE: f64 = 1_000_000.0;
pub const MEAN_CEIL_SCALE: f64 = 10.0;

/// Range of generated test case temperatures
pub const GENERATED_TEMP_MIN: f64 = -99.0;
pub const GENERATED_TEMP_MAX: f64 = 99.0;

/// Tolerance used when comparing output values
pub const VALUE_EPSILON: f64 = 1e-6;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DEFAULT_CITY_CAPACITY: usize = 1024;
pub const PROGRESS_INTERVAL: usize = 100_000;
