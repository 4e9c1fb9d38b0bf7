//! Command implementations
//!
//! - `compare`: compare two folders and render a page for every differing file

pub mod compare;
