use std::path::PathBuf;

use clap::{Parser, Subcommand};
use navcycle_shared::CYCLE_LEN;

const HELP_EPILOG: &str = r#"Config resolution order:
  1) --config/-c PATH
  2) $NAVCYCLE_CONFIG
  3) platform default: ~/.config/navcycle/navcycle.yaml on Linux
"#;

#[derive(Debug, Parser)]
#[command(
    name = "navcycle",
    version,
    about = "Posts a mock navigation notification that cycles through canned directions",
    long_about = None,
    after_long_help = HELP_EPILOG,
)]
pub struct Cli {
    /// Path to YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Optional subcommand. Without one, runs the cycler.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Post the navigation notification and keep updating it until interrupted
    Run {
        /// Stop after this many updates instead of waiting for a signal
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Print the entries the cycler would show, without posting anything
    Preview {
        /// Counter value of the first entry
        #[arg(long, default_value_t = 0)]
        start: u64,
        /// Number of entries to print
        #[arg(long, default_value_t = CYCLE_LEN)]
        count: u64,
        /// Print the notification payloads as JSON
        #[arg(long)]
        json: bool,
    },
}
