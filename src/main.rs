//! CLI entry point for the tile edge-matching assembler

use clap::Parser;
use tilejoin::io::cli::{Cli, TileProcessor};

fn main() -> tilejoin::Result<()> {
    let cli = Cli::parse();
    let processor = TileProcessor::new(cli);
    processor.process()
}
