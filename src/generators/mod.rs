pub mod testcase_generator;

pub use testcase_generator::{TestcaseGenerator, CITIES};
