use std::io::{self, Write as _};

use anyhow::Context as _;
use clap::Parser;
use sampstat_engine::{SAMPLE_SIZES, SampleAnalyzer, SourceId};

use crate::logging;

/// Summarizes uniform random samples drawn from three generators.
///
/// Draws sample sets of 10, 100 and 1000 values from each generator and
/// prints count, mean, sample standard deviation, minimum and maximum.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.verbose)?;

    tracing::info!(
        sample_sizes = ?SAMPLE_SIZES,
        sources = SourceId::LEN,
        "generating report"
    );

    let mut analyzer = SampleAnalyzer::new();
    let mut stdout = io::stdout().lock();
    let blocks = analyzer
        .execute(&mut stdout)
        .context("Failed to generate sample report")?;
    stdout.flush().context("Failed to flush stdout")?;

    tracing::info!(blocks = blocks.len(), "report complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let args = CommandArgs::try_parse_from(["sampstat"]).unwrap();
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_verbose_count() {
        let args = CommandArgs::try_parse_from(["sampstat", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(CommandArgs::try_parse_from(["sampstat", "extra"]).is_err());
    }
}
