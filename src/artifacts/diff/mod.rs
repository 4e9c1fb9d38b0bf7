//! Line alignment and hunk classification
//!
//! - `myers`: Myers' O(ND) shortest edit script over any `Eq` sequence
//! - `opcode`: grouping of an edit script into equal/insert/delete/replace runs
//! - `hunk`: replace-region pairing and intraline change spans

pub mod hunk;
pub mod myers;
pub mod opcode;
