use crate::areas::destination::Destination;
use crate::areas::folder::same_content;
use crate::artifacts::compare::comparison::FolderComparison;
use crate::artifacts::compare::error::CompareError;
use crate::artifacts::compare::result::PairOutcome;
use crate::artifacts::diff::hunk::{HunkClassifier, IntralineOptions};
use crate::artifacts::diff::opcode::align;
use crate::artifacts::render::document::{DiffDocument, RenderOptions};
use crate::artifacts::render::html::{HtmlPage, HtmlRenderer};
use crate::artifacts::render::navigation::NavigationOverlay;
use std::ffi::OsStr;

/// Everything needed to turn two line sequences into a finished page.
///
/// Shared read-only between workers; each call works on its own inputs.
#[derive(Debug)]
pub struct DiffPipeline {
    render: RenderOptions,
    intraline: IntralineOptions,
    navigation: Option<NavigationOverlay>,
    html: HtmlRenderer,
}

impl DiffPipeline {
    pub fn new(
        render: RenderOptions,
        intraline: IntralineOptions,
        navigation: Option<NavigationOverlay>,
    ) -> Result<Self, CompareError> {
        Ok(DiffPipeline {
            render,
            intraline,
            navigation,
            html: HtmlRenderer::new()?,
        })
    }

    pub fn document<S: AsRef<str>>(
        &self,
        left_label: &str,
        right_label: &str,
        left: &[S],
        right: &[S],
    ) -> DiffDocument {
        let opcodes = align(
            &left.iter().map(AsRef::as_ref).collect::<Vec<&str>>(),
            &right.iter().map(AsRef::as_ref).collect::<Vec<&str>>(),
        );
        let hunks = HunkClassifier::new(left, right, &self.intraline).classify(opcodes);

        DiffDocument::render(left_label, right_label, left, right, &hunks, &self.render)
    }

    pub fn to_html(&self, document: &DiffDocument) -> Result<String, CompareError> {
        let page = HtmlPage::from(document);
        let page = match &self.navigation {
            Some(overlay) => overlay.augment(page),
            None => page,
        };

        self.html.render(&page)
    }

    /// Compare one shared entry and, when the bytes differ, write its page.
    pub fn compare_entry(
        &self,
        comparison: &FolderComparison,
        destination: &Destination,
        name: &OsStr,
    ) -> PairOutcome {
        if !comparison.is_comparable(name) {
            return PairOutcome::Skipped;
        }

        match self.try_compare_entry(comparison, destination, name) {
            Ok(outcome) => outcome,
            Err(error) => PairOutcome::Failed(error),
        }
    }

    fn try_compare_entry(
        &self,
        comparison: &FolderComparison,
        destination: &Destination,
        name: &OsStr,
    ) -> Result<PairOutcome, CompareError> {
        let left_path = comparison.left().entry_path(name);
        let right_path = comparison.right().entry_path(name);

        if same_content(&left_path, &right_path)? {
            return Ok(PairOutcome::Identical);
        }

        let left = comparison.left().read_lines(name)?;
        let right = comparison.right().read_lines(name)?;

        let document = self.document(
            &left_path.to_string_lossy(),
            &right_path.to_string_lossy(),
            &left,
            &right,
        );
        let html = self.to_html(&document)?;
        let path = destination.write_document(name, &html)?;

        Ok(PairOutcome::Differs { document: path })
    }
}
