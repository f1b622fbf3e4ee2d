//! CLI entry point for the Markov chain image synthesizer

use chainfill::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> chainfill::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
