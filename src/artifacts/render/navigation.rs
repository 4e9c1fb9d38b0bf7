//! Previous/next change controls for rendered pages
//!
//! The overlay is a template partial placed once, directly after the opening
//! `<body>` tag. It adds a fixed control bar and an inline script that walks
//! the `data-region` rows of the page:
//!
//! - on load the first change region is highlighted, when there is one
//! - "next" and "previous" wrap around at both ends
//! - the selected region is scrolled to the middle of the viewport and is the
//!   only highlighted one
//! - with no change regions both actions return without touching the page

use crate::artifacts::render::html::HtmlPage;
use derive_new::new;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_HIGHLIGHT: &str = "yellow";

/// A CSS color value safe to place inside the overlay's `<style>` block.
///
/// Accepted forms are a named color (`orange`), a hex color with 3, 4, 6 or 8
/// digits (`#ffa500`) and the `rgb`/`rgba`/`hsl`/`hsla` functions over numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HighlightColor(String);

impl FromStr for HighlightColor {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if is_named_color(value) || is_hex_color(value) || is_color_function(value) {
            Ok(HighlightColor(value.to_string()))
        } else {
            Err(format!("{value:?} is not a CSS color"))
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for HighlightColor {
    fn default() -> Self {
        HighlightColor(DEFAULT_HIGHLIGHT.to_string())
    }
}

fn is_named_color(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

fn is_color_function(value: &str) -> bool {
    ["rgba(", "rgb(", "hsla(", "hsl("]
        .iter()
        .find_map(|name| value.strip_prefix(name))
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|args| {
            args.chars().any(|c| c.is_ascii_digit())
                && args
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, ' ' | ',' | '.' | '%' | '/'))
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, new)]
pub struct NavigationOverlay {
    pub highlight_color: HighlightColor,
}

impl NavigationOverlay {
    /// Attach the overlay to a page; applying it twice still renders one bar.
    pub fn augment(&self, mut page: HtmlPage) -> HtmlPage {
        page.navigation = Some(self.clone());
        page
    }
}
