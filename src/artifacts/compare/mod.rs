//! Folder comparison
//!
//! - `comparison`: partition of two flat listings into common and unique names
//! - `pipeline`: align, classify, render and serialize one differing pair
//! - `result`: per-pair outcomes and the aggregated comparison result
//! - `error`: the error taxonomy shared by all of the above

pub mod comparison;
pub mod error;
pub mod pipeline;
pub mod result;
