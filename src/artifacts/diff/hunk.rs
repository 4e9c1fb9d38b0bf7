use crate::artifacts::diff::opcode::{OpTag, Opcode, align};
use derive_new::new;
use std::ops::Range;

/// Policy for intraline highlighting inside replaced regions
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IntralineOptions {
    pub enabled: bool,
    /// Lines longer than this many characters are never character-aligned
    pub max_line_len: usize,
    /// Pair lines up to the shorter side when a replacement is uneven
    pub pair_mismatched: bool,
}

impl Default for IntralineOptions {
    fn default() -> Self {
        IntralineOptions::new(true, 1000, false)
    }
}

/// Character offsets of the differing substring on each side of a line pair
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangeSpan {
    pub left: Range<usize>,
    pub right: Range<usize>,
}

impl ChangeSpan {
    /// Align two lines character by character and keep the outermost change.
    ///
    /// Returns `None` when the lines hold the same characters.
    pub fn between(left: &str, right: &str) -> Option<ChangeSpan> {
        let a = left.chars().collect::<Vec<_>>();
        let b = right.chars().collect::<Vec<_>>();

        let opcodes = align(&a, &b);
        let mut changes = opcodes.iter().filter(|opcode| opcode.is_change());
        let first = changes.next()?;
        let last = changes.last().unwrap_or(first);

        Some(ChangeSpan::new(
            first.a.start..last.a.end,
            first.b.start..last.b.end,
        ))
    }
}

/// A left line index matched with a right line index inside a replacement
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LinePair {
    pub left: usize,
    pub right: usize,
    pub span: Option<ChangeSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RenderableHunk {
    pub opcode: Opcode,
    /// Only populated for replacements that could be paired
    pub pairs: Vec<LinePair>,
}

impl RenderableHunk {
    pub fn tag(&self) -> OpTag {
        self.opcode.tag
    }

    pub fn span_for(&self, left: usize, right: usize) -> Option<&ChangeSpan> {
        self.pairs
            .iter()
            .find(|pair| pair.left == left && pair.right == right)
            .and_then(|pair| pair.span.as_ref())
    }
}

/// Attach intraline change spans to the replacements of an alignment
#[derive(Debug, Clone, new)]
pub struct HunkClassifier<'c, S> {
    left: &'c [S],
    right: &'c [S],
    options: &'c IntralineOptions,
}

impl<'c, S: AsRef<str>> HunkClassifier<'c, S> {
    pub fn classify(&self, opcodes: Vec<Opcode>) -> Vec<RenderableHunk> {
        opcodes
            .into_iter()
            .map(|opcode| {
                let pairs = match opcode.tag {
                    OpTag::Replace if self.options.enabled => self.pair_lines(&opcode),
                    _ => Vec::new(),
                };
                RenderableHunk::new(opcode, pairs)
            })
            .collect()
    }

    fn pair_lines(&self, opcode: &Opcode) -> Vec<LinePair> {
        if opcode.a.len() != opcode.b.len() && !self.options.pair_mismatched {
            return Vec::new();
        }

        opcode
            .a
            .clone()
            .zip(opcode.b.clone())
            .map(|(left, right)| {
                let span = self.span_between(self.left[left].as_ref(), self.right[right].as_ref());
                LinePair::new(left, right, span)
            })
            .collect()
    }

    fn span_between(&self, left: &str, right: &str) -> Option<ChangeSpan> {
        let max = self.options.max_line_len;
        if left.chars().count() > max || right.chars().count() > max {
            return None;
        }

        ChangeSpan::between(left, right)
    }
}
