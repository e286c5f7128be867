//! Dump the shape and text structure of a deck to a text report.

use std::path::PathBuf;

use clap::Parser;
use deckhand::common::unit::format_inches;
use deckhand::deck::dump::{self, DEFAULT_INPUT, DEFAULT_OUTPUT, DumpOutcome};

/// Write a plain-text report of every slide's shapes and the deck's layouts.
#[derive(Debug, Parser)]
#[clap(name = "dump-structure", version, about)]
struct Args {
    /// Deck to inspect
    #[clap(long, short, value_name = "PATH", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Report to write (UTF-8)
    #[clap(long, short, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match dump::dump(&args.input, &args.output)? {
        DumpOutcome::InputMissing { path } => {
            eprintln!("{}", dump::missing_input_message(&path));
        },
        DumpOutcome::Written {
            path,
            slides,
            width,
            height,
        } => {
            println!("Written: {}", path.display());
            println!(
                "Slides: {} | Size: {} x {} in",
                slides,
                format_inches(width),
                format_inches(height)
            );
        },
    }
    Ok(())
}
