use anyhow::Result;
use clap::Parser;
use tracing::Level;

mod args;
mod data_loader;
mod scenarios;

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    scenarios::run(&args)
}
