//! Diff data structures and algorithms
//!
//! - `diff`: Myers' line alignment, opcodes and hunk classification
//! - `render`: side-by-side document model and its HTML serialization
//! - `compare`: folder partitioning, per-pair outcomes and errors

pub mod compare;
pub mod diff;
pub mod render;
