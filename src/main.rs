//! Social Stats command line

use anyhow::{Context, Result};
use clap::Parser;
use social_stats::{report, run, AnalysisConfig};
use std::path::PathBuf;

/// Analyze a comma-delimited social-media usage table.
#[derive(Parser, Debug)]
#[command(name = "social_stats", version, about)]
struct Cli {
    /// Input file; the first line holds the column names.
    input: PathBuf,

    /// JSON file overriding column names and the student label.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    let analysis = run(&cli.input, &config)
        .with_context(|| format!("analyzing {}", cli.input.display()))?;

    let output = if cli.json {
        report::render_json(&analysis).context("serializing report")?
    } else {
        report::render_text(&analysis).context("rendering report")?
    };
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_input_and_flags() {
        let cli =
            Cli::try_parse_from(["social_stats", "usage.csv", "--config", "cfg.json", "--json"])
                .unwrap();
        assert_eq!(cli.input, PathBuf::from("usage.csv"));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert!(cli.json);
    }

    #[test]
    fn defaults_to_table_output_without_config() {
        let cli = Cli::try_parse_from(["social_stats", "usage.csv"]).unwrap();
        assert_eq!(cli.config, None);
        assert!(!cli.json);
    }

    #[test]
    fn help_is_available() {
        let err = Cli::try_parse_from(["social_stats", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn config_flag_needs_a_value() {
        let err = Cli::try_parse_from(["social_stats", "usage.csv", "--config"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn input_is_required() {
        let err = Cli::try_parse_from(["social_stats"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
