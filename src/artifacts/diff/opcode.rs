use crate::artifacts::diff::myers::{DiffAlgorithm, Edit, MyersDiff};
use derive_new::new;
use serde::Serialize;
use std::hash::Hash;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpTag {
    Equal,
    Insert,
    Delete,
    Replace,
}

/// A contiguous alignment segment: `a` indexes the left sequence, `b` the right
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Opcode {
    pub tag: OpTag,
    pub a: Range<usize>,
    pub b: Range<usize>,
}

impl Opcode {
    /// Collapse an edit script into alternating runs of matched lines and gaps.
    ///
    /// A gap holding lines from both sides is a replacement, otherwise it is a
    /// pure deletion or insertion.
    pub fn from_edits(edits: &[Edit]) -> Vec<Opcode> {
        let mut opcodes = Vec::new();
        let (mut run_a, mut run_b) = (0, 0);
        let (mut x, mut y) = (0, 0);
        let mut run_is_equal = None;

        for edit in edits {
            let is_equal = matches!(edit, Edit::Equal { .. });

            if let Some(previous) = run_is_equal
                && previous != is_equal
            {
                opcodes.push(Self::from_run(previous, run_a..x, run_b..y));
                (run_a, run_b) = (x, y);
            }
            run_is_equal = Some(is_equal);

            match edit {
                Edit::Equal { .. } => {
                    x += 1;
                    y += 1;
                }
                Edit::Delete { .. } => x += 1,
                Edit::Insert { .. } => y += 1,
            }
        }

        if let Some(is_equal) = run_is_equal {
            opcodes.push(Self::from_run(is_equal, run_a..x, run_b..y));
        }

        opcodes
    }

    fn from_run(is_equal: bool, a: Range<usize>, b: Range<usize>) -> Opcode {
        let tag = match (is_equal, a.is_empty(), b.is_empty()) {
            (true, _, _) => OpTag::Equal,
            (false, false, false) => OpTag::Replace,
            (false, false, true) => OpTag::Delete,
            (false, true, _) => OpTag::Insert,
        };

        Opcode::new(tag, a, b)
    }

    pub fn is_change(&self) -> bool {
        self.tag != OpTag::Equal
    }
}

/// Align two line sequences and return the opcodes covering both of them
pub fn align<T: Eq + Hash>(left: &[T], right: &[T]) -> Vec<Opcode> {
    MyersDiff::new(left, right).opcodes()
}
