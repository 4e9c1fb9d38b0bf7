use crate::artifacts::compare::error::CompareError;
use crate::artifacts::render::document::{Cell, DiffDocument, Row, RowStyle};
use crate::artifacts::render::navigation::NavigationOverlay;
use handlebars::Handlebars;
use serde::Serialize;

const PAGE_TEMPLATE: &str = include_str!("templates/page.hbs");
const NAVIGATION_TEMPLATE: &str = include_str!("templates/navigation.hbs");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlCell {
    pub line_no: usize,
    pub segments: Vec<Segment>,
}

impl From<&Cell> for HtmlCell {
    fn from(cell: &Cell) -> Self {
        let segments = match &cell.highlight {
            Some(range) => {
                let before = cell.text.chars().take(range.start).collect::<String>();
                let changed = cell
                    .text
                    .chars()
                    .skip(range.start)
                    .take(range.len())
                    .collect::<String>();
                let after = cell.text.chars().skip(range.end).collect::<String>();

                [(before, false), (changed, true), (after, false)]
                    .into_iter()
                    .filter(|(text, _)| !text.is_empty())
                    .map(|(text, highlight)| Segment { text, highlight })
                    .collect()
            }
            None => vec![Segment {
                text: cell.text.clone(),
                highlight: false,
            }],
        };

        HtmlCell {
            line_no: cell.line_no,
            segments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlRow {
    pub class: &'static str,
    pub in_region: bool,
    pub region: usize,
    pub folded: bool,
    pub hidden: usize,
    pub left: Option<HtmlCell>,
    pub right: Option<HtmlCell>,
}

impl From<&Row> for HtmlRow {
    fn from(row: &Row) -> Self {
        let hidden = match row.style {
            RowStyle::Folded { hidden } => hidden,
            _ => 0,
        };

        HtmlRow {
            class: row.style.css_class(),
            in_region: row.region.is_some(),
            region: row.region.unwrap_or_default(),
            folded: matches!(row.style, RowStyle::Folded { .. }),
            hidden,
            left: row.left.as_ref().map(HtmlCell::from),
            right: row.right.as_ref().map(HtmlCell::from),
        }
    }
}

/// Template context for one rendered comparison page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlPage {
    pub left_label: String,
    pub right_label: String,
    pub rows: Vec<HtmlRow>,
    pub has_changes: bool,
    pub navigation: Option<NavigationOverlay>,
}

impl From<&DiffDocument> for HtmlPage {
    fn from(document: &DiffDocument) -> Self {
        HtmlPage {
            left_label: document.left_label.clone(),
            right_label: document.right_label.clone(),
            rows: document.rows.iter().map(HtmlRow::from).collect(),
            has_changes: document.has_changes(),
            navigation: None,
        }
    }
}

impl HtmlPage {
    pub fn change_regions(&self) -> usize {
        let mut regions = self
            .rows
            .iter()
            .filter(|row| row.in_region)
            .map(|row| row.region)
            .collect::<Vec<_>>();
        regions.dedup();
        regions.len()
    }
}

/// Serializes pages through the embedded handlebars templates
pub struct HtmlRenderer {
    handlebars: Handlebars<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, CompareError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string("page", PAGE_TEMPLATE)?;
        handlebars.register_partial("navigation", NAVIGATION_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    pub fn render(&self, page: &HtmlPage) -> Result<String, CompareError> {
        Ok(self.handlebars.render("page", page)?)
    }
}

impl std::fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlRenderer").finish_non_exhaustive()
    }
}
