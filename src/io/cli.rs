//! Command-line interface for the tile assembler
//!
//! One positional argument (the input file) and one flag. The default run
//! parses, identifies corners, and prints the corner id product; `--layout`
//! additionally reconstructs the grid and prints one row per line.

use crate::algorithm::assembly::assemble;
use crate::algorithm::corners::identify_corners;
use crate::io::error::{AssemblyError, Result};
use crate::io::parser::parse_tiles;
use crate::spatial::tile::Tile;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilejoin")]
#[command(
    author,
    version,
    about = "Identify corner tiles and assemble bordered image tiles"
)]
/// Command-line arguments for the tile assembler
pub struct Cli {
    /// Input file containing blank-line-separated tile blocks
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Also reconstruct and print the grid layout, one row per line
    #[arg(short, long)]
    pub layout: bool,
}

/// Reads the input file, runs the searches, and prints the results
pub struct TileProcessor {
    cli: Cli,
}

impl TileProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full pipeline and print results to stdout
    ///
    /// # Errors
    ///
    /// Returns a format error if the input cannot be read or parsed, or an
    /// assembly inconsistency if corner identification (or, with `--layout`,
    /// grid reconstruction) fails. Nothing is printed on failure.
    // Printing the answer is this binary's output channel
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        let tiles = self.load_tiles()?;
        let report = identify_corners(&tiles)?;

        if self.cli.layout {
            let grid = assemble(&tiles)?;
            println!("{}", report.product);
            for line in grid.render_layout() {
                println!("{line}");
            }
        } else {
            println!("{}", report.product);
        }

        Ok(())
    }

    /// Read and parse the input file
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::FileSystem`] when the file cannot be read,
    /// or any parser format error.
    pub fn load_tiles(&self) -> Result<Vec<Tile>> {
        let text =
            std::fs::read_to_string(&self.cli.input).map_err(|source| AssemblyError::FileSystem {
                path: self.cli.input.clone(),
                source,
            })?;
        parse_tiles(&text)
    }
}
