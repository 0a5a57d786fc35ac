//! Input/output operations and error handling
//!
//! This module contains I/O-related functionality including:
//! - Command-line interface and the run-and-print processor
//! - Error types shared across the crate
//! - Tile input parsing and validation

/// Command-line interface and file processing
pub mod cli;
/// Error types and result alias
pub mod error;
/// Tile block parsing and format validation
pub mod parser;
