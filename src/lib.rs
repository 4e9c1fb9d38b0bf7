//! Side-by-side directory comparison
//!
//! The crate is split the same way the binary flows:
//!
//! - `areas`: the two input folders and the output destination on disk
//! - `artifacts`: line alignment, hunk classification, document rendering
//!   and the per-run comparison result
//! - `commands`: the `compare` command tying the pieces together

pub mod areas;
pub mod artifacts;
pub mod commands;
