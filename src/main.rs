//! `etsi` command line tool.

use clap::{ArgAction, Parser, Subcommand};
use etsi_deliverables::{Config, deliverables, render_listing};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "etsi",
    version,
    about = "etsi helps you write your ETSI documents in markdown.",
    long_about = "etsi is a CLI tool that helps you write your ETSI documents in markdown."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON configuration file (endpoint, search filter, timeout).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Download the list of ETSI TTCN-3 deliverables.
    Download,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> etsi_deliverables::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    match cli.command {
        Command::Download => {
            let listing = render_listing(deliverables(&config).await?)?;
            println!("{listing}");
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(&cli).await {
        tracing::error!(code = error.error_code(), "{}", error);
        println!("{error}");
        std::process::exit(1);
    }
}
