//! Side-by-side document rendering
//!
//! - `document`: row model built from classified hunks
//! - `html`: self-contained HTML serialization through handlebars templates
//! - `navigation`: optional previous/next change overlay

pub mod document;
pub mod html;
pub mod navigation;
