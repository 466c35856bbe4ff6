mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::dispatch::dispatch;
use cli::types::Cli;

/// Environment variable holding the log filter
const LOG_ENV: &str = "BRANCHYARD_LOG";

/// Diagnostics go to stderr so stdout stays clean for user output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_tracing();

    if let Err(e) = dispatch(cli) {
        eprintln!("{} {e}", "✗".red().bold());
        for cause in e.chain().skip(1) {
            eprintln!("  {} {cause}", "caused by:".dimmed());
        }
        std::process::exit(1);
    }
}
