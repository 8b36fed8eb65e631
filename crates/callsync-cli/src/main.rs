mod cmd_config;
mod cmd_sync;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "callsync",
    version,
    about = "Sync ElevenLabs call transcripts to Tuner"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch conversations in the time window and push them to Tuner
    Sync {
        /// Look-back window in hours (overrides TIME_WINDOW_HOURS)
        #[arg(long)]
        hours: Option<u64>,
        /// Window start as a Unix timestamp (with --end, replaces the look-back)
        #[arg(long)]
        start: Option<i64>,
        /// Window end as a Unix timestamp
        #[arg(long)]
        end: Option<i64>,
        /// Fetch and map without uploading anything to Tuner
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the resolved configuration with secrets redacted
    Config,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = callsync_core::Config::from_env()?;

    match cli.cmd {
        Command::Sync {
            hours,
            start,
            end,
            dry_run,
        } => cmd_sync::execute(&config, hours, start, end, dry_run),
        Command::Config => cmd_config::execute(&config),
    }
}
