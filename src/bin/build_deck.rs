//! Build the SKIFIN company deck.

use std::path::PathBuf;

use clap::Parser;
use deckhand::deck::assembler::{self, DEFAULT_OUTPUT};

/// Assemble the 16-slide SKIFIN deck and save it as a .pptx file.
#[derive(Debug, Parser)]
#[clap(name = "build-deck", version, about)]
struct Args {
    /// Path of the deck to write; its directory must exist
    #[clap(long, short, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    assembler::save(&args.output)?;
    let shown = std::path::absolute(&args.output).unwrap_or(args.output);
    println!("Presentation saved to: {}", shown.display());
    Ok(())
}
