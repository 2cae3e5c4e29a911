use clap::Parser;
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

#[derive(Parser, Debug)]
#[command(name = "brc-aggregator")]
#[command(about = "Per-city min/mean/max temperature summary of a 'city;temperature' file")]
#[command(version)]
pub struct Cli {
    #[arg(default_value = DEFAULT_INPUT_FILE, help = "Input measurements file")]
    pub input_file: PathBuf,

    #[arg(default_value = DEFAULT_OUTPUT_FILE, help = "Output summary file")]
    pub output_file: PathBuf,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the progress spinner")]
    pub quiet: bool,

    #[arg(long, help = "Memory-map the input instead of buffered reads")]
    pub mmap: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let cli = Cli::try_parse_from(["brc-aggregator"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("testcase.txt"));
        assert_eq!(cli.output_file, PathBuf::from("output.txt"));
        assert!(!cli.verbose);
        assert!(!cli.mmap);
    }

    #[test]
    fn test_positional_paths() {
        let cli = Cli::try_parse_from(["brc-aggregator", "in.txt", "out.txt", "-v", "--mmap"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("in.txt"));
        assert_eq!(cli.output_file, PathBuf::from("out.txt"));
        assert!(cli.verbose);
        assert!(cli.mmap);
    }

    #[test]
    fn test_input_only() {
        let cli = Cli::try_parse_from(["brc-aggregator", "measurements.txt"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("measurements.txt"));
        assert_eq!(cli.output_file, PathBuf::from("output.txt"));
    }

    #[test]
    fn test_rejects_third_path() {
        assert!(Cli::try_parse_from(["brc-aggregator", "a", "b", "c"]).is_err());
    }
}
