//! File system areas
//!
//! - `folder`: the two input directories, listed flat and read as text
//! - `destination`: the output directory receiving rendered documents

pub mod destination;
pub mod folder;
