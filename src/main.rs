use anyhow::Result;
use chrono::{Local, Utc};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gpt_explorer::{
    error_helper, reporter, ExplorerConfig, ExplorerError, ExplorerSummary, ExportPackage,
    LegacyWeekNumbering,
};

#[derive(Parser)]
#[command(name = "gpt-explorer")]
#[command(about = "Summary statistics for a ChatGPT data export", long_about = None)]
struct Cli {
    /// Directory holding user.json and conversations.json
    #[arg(long, value_name = "DIRECTORY")]
    data_dir: Option<PathBuf>,

    /// User record file, relative to the data directory
    #[arg(long, value_name = "FILE")]
    user_file: Option<PathBuf>,

    /// Conversations file, relative to the data directory
    #[arg(long, value_name = "FILE")]
    conversations_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the summary to a JSON file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = ExplorerConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(user_file) = cli.user_file {
        config.user_file = user_file;
    }
    if let Some(conversations_file) = cli.conversations_file {
        config.conversations_file = conversations_file;
    }

    let summary = match build_summary(&config).await {
        Ok(summary) => summary,
        Err(e) => {
            error_helper::print_error_with_help(&e);
            return Err(e.into());
        }
    };

    reporter::print_report(&summary, &config.chart, &Local);

    if let Some(output_path) = cli.output {
        reporter::write_json_report(&summary, &output_path)?;
        println!("\n📄 Report saved to: {}", output_path.display());
    }

    Ok(())
}

async fn build_summary(config: &ExplorerConfig) -> Result<ExplorerSummary, ExplorerError> {
    config.validate()?;

    let user_path = config.user_path();
    let conversations_path = config.conversations_path();
    info!(
        user = %user_path.display(),
        conversations = %conversations_path.display(),
        "Loading export package"
    );
    let package = ExportPackage::load(&user_path, &conversations_path).await?;

    // One reference instant for every window and the elapsed-day count
    let now = Utc::now();
    ExplorerSummary::build(
        &package,
        &config.window_days,
        now,
        &LegacyWeekNumbering::new(Local),
    )
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
