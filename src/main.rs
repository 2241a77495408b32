//! Mining session dashboard - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Mining session dashboard - TUI for JSON mining session logs
#[derive(Parser, Debug)]
#[command(name = "minedash")]
#[command(version)]
#[command(about = "TUI dashboard for directories of JSON mining session logs")]
pub struct Args {
    /// Directory of .json session files to load on startup
    pub directory: Option<PathBuf>,

    /// Chart drawn once the first load finishes
    #[arg(short, long, value_parser = ["tons", "tph", "refined", "pie"])]
    pub chart: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = minedash::config::load_config_with_precedence(args.config.clone())?;
        let merged = minedash::config::merge_config(config_file);
        let with_env = minedash::config::apply_env_overrides(merged);
        minedash::config::apply_cli_overrides(with_env, args.directory.clone(), args.chart.clone())
    };

    minedash::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let cli_args = minedash::view::CliArgs {
        directory: config.directory,
        chart: config.chart,
        color: Some(minedash::view::ColorConfig::from_env_and_args(args.no_color)),
    };

    minedash::view::run(cli_args)?;

    Ok(())
}
