use crate::artifacts::diff::hunk::{ChangeSpan, RenderableHunk};
use crate::artifacts::diff::opcode::OpTag;
use derive_new::new;
use std::ops::Range;

pub const DEFAULT_TABSIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RenderOptions {
    /// Unchanged lines kept around each change; `None` shows the whole file
    pub context: Option<usize>,
    pub tabsize: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::new(None, DEFAULT_TABSIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Unchanged,
    Added,
    Removed,
    Changed,
    /// Stand-in for a run of unchanged rows hidden by context folding
    Folded { hidden: usize },
}

impl RowStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            RowStyle::Unchanged => "diff_equal",
            RowStyle::Added => "diff_add",
            RowStyle::Removed => "diff_sub",
            RowStyle::Changed => "diff_chg",
            RowStyle::Folded { .. } => "diff_fold",
        }
    }
}

/// One side of a row: 1-based line number, tab-expanded text and the
/// highlighted character range, if any
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Cell {
    pub line_no: usize,
    pub text: String,
    pub highlight: Option<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Row {
    pub left: Option<Cell>,
    pub right: Option<Cell>,
    pub style: RowStyle,
    /// Index of the change region this row belongs to
    pub region: Option<usize>,
}

impl Row {
    fn folded(hidden: usize) -> Self {
        Row::new(None, None, RowStyle::Folded { hidden }, None)
    }

    pub fn left_text(&self) -> Option<&str> {
        self.left.as_ref().map(|cell| cell.text.as_str())
    }

    pub fn right_text(&self) -> Option<&str> {
        self.right.as_ref().map(|cell| cell.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffDocument {
    pub left_label: String,
    pub right_label: String,
    pub rows: Vec<Row>,
    pub regions: usize,
}

impl DiffDocument {
    pub fn render<S: AsRef<str>>(
        left_label: &str,
        right_label: &str,
        left: &[S],
        right: &[S],
        hunks: &[RenderableHunk],
        options: &RenderOptions,
    ) -> DiffDocument {
        let renderer = RowRenderer {
            left,
            right,
            tabsize: options.tabsize,
        };

        let mut rows = Vec::new();
        let mut regions = 0;

        for hunk in hunks {
            let region = match hunk.tag() {
                OpTag::Equal => None,
                _ => {
                    regions += 1;
                    Some(regions - 1)
                }
            };
            renderer.push_hunk(&mut rows, hunk, region);
        }

        if let Some(context) = options.context {
            rows = fold_unchanged(rows, context);
        }

        DiffDocument {
            left_label: left_label.to_string(),
            right_label: right_label.to_string(),
            rows,
            regions,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.regions > 0
    }
}

struct RowRenderer<'r, S> {
    left: &'r [S],
    right: &'r [S],
    tabsize: usize,
}

impl<S: AsRef<str>> RowRenderer<'_, S> {
    fn push_hunk(&self, rows: &mut Vec<Row>, hunk: &RenderableHunk, region: Option<usize>) {
        let opcode = &hunk.opcode;

        match opcode.tag {
            OpTag::Equal => rows.extend(opcode.a.clone().zip(opcode.b.clone()).map(|(a, b)| {
                Row::new(
                    Some(self.left_cell(a, None)),
                    Some(self.right_cell(b, None)),
                    RowStyle::Unchanged,
                    region,
                )
            })),
            OpTag::Delete => rows.extend(opcode.a.clone().map(|a| {
                Row::new(Some(self.left_cell(a, None)), None, RowStyle::Removed, region)
            })),
            OpTag::Insert => rows.extend(opcode.b.clone().map(|b| {
                Row::new(None, Some(self.right_cell(b, None)), RowStyle::Added, region)
            })),
            OpTag::Replace => {
                // lines are laid out positionally, the surplus side gets blanks
                let height = opcode.a.len().max(opcode.b.len());
                rows.extend((0..height).map(|offset| {
                    let a = Some(opcode.a.start + offset).filter(|a| opcode.a.contains(a));
                    let b = Some(opcode.b.start + offset).filter(|b| opcode.b.contains(b));
                    let span = a.zip(b).and_then(|(a, b)| hunk.span_for(a, b));

                    Row::new(
                        a.map(|a| self.left_cell(a, span.map(|span| &span.left))),
                        b.map(|b| self.right_cell(b, span.map(|span| &span.right))),
                        RowStyle::Changed,
                        region,
                    )
                }))
            }
        }
    }

    fn left_cell(&self, index: usize, highlight: Option<&Range<usize>>) -> Cell {
        self.cell(self.left[index].as_ref(), index, highlight)
    }

    fn right_cell(&self, index: usize, highlight: Option<&Range<usize>>) -> Cell {
        self.cell(self.right[index].as_ref(), index, highlight)
    }

    fn cell(&self, line: &str, index: usize, highlight: Option<&Range<usize>>) -> Cell {
        let (text, highlight) = expand_tabs(line, self.tabsize, highlight);
        Cell::new(index + 1, text, highlight)
    }
}

/// Replace tabs with spaces up to the next tab stop, moving the highlighted
/// character range along with the text.
pub fn expand_tabs(
    line: &str,
    tabsize: usize,
    highlight: Option<&Range<usize>>,
) -> (String, Option<Range<usize>>) {
    let mut text = String::with_capacity(line.len());
    let mut column = 0;
    let (mut start, mut end) = (None, None);

    for (index, c) in line.chars().enumerate() {
        if let Some(range) = highlight {
            if range.start == index {
                start = Some(column);
            }
            if range.end == index {
                end = Some(column);
            }
        }

        if c == '\t' && tabsize > 0 {
            let width = tabsize - column % tabsize;
            text.extend(std::iter::repeat_n(' ', width));
            column += width;
        } else {
            text.push(c);
            column += 1;
        }
    }

    let highlight = highlight.map(|_| start.unwrap_or(column)..end.unwrap_or(column));
    (text, highlight)
}

/// Collapse unchanged runs down to `context` rows on the sides facing a change
fn fold_unchanged(rows: Vec<Row>, context: usize) -> Vec<Row> {
    let mut folded = Vec::with_capacity(rows.len());
    let mut run = Vec::new();
    let mut seen_change = false;

    for row in rows {
        if row.style == RowStyle::Unchanged {
            run.push(row);
        } else {
            flush_run(&mut folded, &mut run, seen_change, true, context);
            seen_change = true;
            folded.push(row);
        }
    }
    flush_run(&mut folded, &mut run, seen_change, false, context);

    folded
}

fn flush_run(
    folded: &mut Vec<Row>,
    run: &mut Vec<Row>,
    change_before: bool,
    change_after: bool,
    context: usize,
) {
    let head = if change_before { context } else { 0 };
    let tail = if change_after { context } else { 0 };

    if run.len() <= head + tail {
        folded.append(run);
        return;
    }

    let hidden = run.len() - head - tail;
    let tail_rows = run.split_off(run.len() - tail);
    run.truncate(head);

    folded.append(run);
    folded.push(Row::folded(hidden));
    folded.extend(tail_rows);
}
