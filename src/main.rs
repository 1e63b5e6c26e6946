use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

use rollcall::constants::DEFAULT_CONFIG_FILE;
use rollcall::{Config, RecordStore, Shell};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Rollcall - console student roster manager backed by a delimited text file")]
struct Args {
    #[arg(short, long, help = "Roster CSV file (overrides the configured one)")]
    data: Option<PathBuf>,

    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, help = "Configuration file path")]
    config: PathBuf,

    #[arg(short, long, help = "Verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)?;

    let verbosity = if args.verbose {
        "verbose"
    } else {
        &config.logging.verbosity
    };
    rollcall::utils::setup_logging(verbosity)?;

    let data_file = args
        .data
        .unwrap_or_else(|| PathBuf::from(&config.storage.data_file));

    info!("Starting Rollcall");
    info!("Roster file: {}", data_file.display());

    let store = RecordStore::open(data_file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&store, stdin.lock(), stdout.lock());
    shell.run()?;

    info!("Session ended");

    Ok(())
}
