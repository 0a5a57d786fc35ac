//! Core assembly algorithms
//!
//! This module contains the matching and assembly stages:
//! - Pairwise orientation-matching search across all tiles
//! - Corner identification from match counts
//! - Breadth-first grid reconstruction from a seeded corner

/// Breadth-first grid reconstruction
pub mod assembly;
/// Corner identification and scoring
pub mod corners;
/// Directional match predicates and the pairwise search
pub mod matching;
