use tracing::Level;

use crate::cli::args::Cli;
use crate::error::AggregationError;
use crate::processors::Aggregator;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let progress = ProgressReporter::new_spinner("Aggregating measurements...", cli.quiet);
    let aggregator = Aggregator::new().with_mmap(cli.mmap);

    aggregator
        .run(&cli.input_file, &cli.output_file, Some(&progress))
        .map_err(|e| describe(e, &cli))?;

    Ok(())
}

fn describe(error: AggregationError, cli: &Cli) -> anyhow::Error {
    let context = if error.is_format_error() {
        format!("Invalid input in {}", cli.input_file.display())
    } else {
        format!(
            "Failed to aggregate {} into {}",
            cli.input_file.display(),
            cli.output_file.display()
        )
    };
    anyhow::Error::new(error).context(context)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // A subscriber may already be installed when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
