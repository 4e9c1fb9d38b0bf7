use crate::artifacts::diff::opcode::Opcode;
use derive_new::new;
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::{Index, IndexMut, Range};

/// One step of an edit script, as indices into the two compared sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Delete { a: usize },
    Insert { b: usize },
    Equal { a: usize, b: usize },
}

pub trait DiffAlgorithm<'d, T> {
    type EditScript;

    fn diff(&self) -> Self::EditScript;

    fn opcodes(&self) -> Vec<Opcode>
    where
        Self::EditScript: AsRef<[Edit]>,
    {
        Opcode::from_edits(self.diff().as_ref())
    }
}

/// Myers' shortest edit script, in linear space.
///
/// Common prefixes and suffixes are matched first. What is left is split at
/// the middle snake, the diagonal run where a search from the start meets a
/// search from the end, and both halves are solved the same way. The two
/// frontiers are allocated once and reused by every split, so memory is
/// O(N + M) and time O((N + M) · D). A gap whose sides share no element at all
/// is emitted directly without searching.
///
/// When several scripts are equally short, both searches visit the diagonals
/// closest to the right sequence first. Insertions then come ahead of
/// deletions and matches land on the earliest left elements: `ab` against `ba`
/// keeps the first `a`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Hash> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type EditScript = Vec<Edit>;

    fn diff(&self) -> Self::EditScript {
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));
        let depth = max_depth(self.a.len(), self.b.len());
        let mut forward = Frontier::new(depth);
        let mut backward = Frontier::new(depth);

        self.conquer(
            0..self.a.len(),
            0..self.b.len(),
            &mut forward,
            &mut backward,
            &mut edits,
        );

        edits
    }
}

impl<T: Eq + Hash> MyersDiff<'_, T> {
    fn conquer(
        &self,
        a: Range<usize>,
        b: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
        edits: &mut Vec<Edit>,
    ) {
        let prefix = self.common_prefix(a.clone(), b.clone());
        edits.extend((0..prefix).map(|i| Edit::Equal {
            a: a.start + i,
            b: b.start + i,
        }));
        let (a, b) = (a.start + prefix..a.end, b.start + prefix..b.end);

        let suffix = self.common_suffix(a.clone(), b.clone());
        let (a, b) = (a.start..a.end - suffix, b.start..b.end - suffix);

        if a.is_empty() || b.is_empty() || self.disjoint(a.clone(), b.clone()) {
            edits.extend(b.clone().map(|b| Edit::Insert { b }));
            edits.extend(a.clone().map(|a| Edit::Delete { a }));
        } else if let Some((x, y)) = self.middle_snake(a.clone(), b.clone(), forward, backward) {
            self.conquer(a.start..x, b.start..y, forward, backward, edits);
            self.conquer(x..a.end, y..b.end, forward, backward, edits);
        } else {
            // the search always meets within its depth bound
            edits.extend(b.clone().map(|b| Edit::Insert { b }));
            edits.extend(a.clone().map(|a| Edit::Delete { a }));
        }

        edits.extend((0..suffix).map(|i| Edit::Equal {
            a: a.end + i,
            b: b.end + i,
        }));
    }

    /// Start of the middle snake, in absolute indices.
    ///
    /// Both searches run one depth at a time; `vf[k]` holds the furthest
    /// offset into `a` reached from the start on diagonal `k`, `vb[k]` the
    /// furthest offset from the end on the mirrored diagonal.
    fn middle_snake(
        &self,
        a: Range<usize>,
        b: Range<usize>,
        vf: &mut Frontier,
        vb: &mut Frontier,
    ) -> Option<(usize, usize)> {
        let (n, m) = (a.len(), b.len());
        let delta = n as isize - m as isize;
        let odd = delta & 1 == 1;

        vf[1] = 0;
        vb[1] = 0;

        for d in 0..max_depth(n, m) as isize {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                    // insertion, coming down from k+1
                    vf[k + 1]
                } else {
                    // deletion, coming right from k-1
                    vf[k - 1] + 1
                };
                let y = (x as isize - k) as usize;
                let (x0, y0) = (x, y);

                if x < n && y < m {
                    x += self.common_prefix(a.start + x..a.end, b.start + y..b.end);
                }
                vf[k] = x;

                if odd && (k - delta).abs() < d && vf[k] + vb[-(k - delta)] >= n {
                    return Some((a.start + x0, b.start + y0));
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                    vb[k + 1]
                } else {
                    vb[k - 1] + 1
                };
                let mut y = (x as isize - k) as usize;

                if x < n && y < m {
                    let snake = self.common_suffix(a.start..a.end - x, b.start..b.end - y);
                    x += snake;
                    y += snake;
                }
                vb[k] = x;

                if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                    return Some((a.end - x, b.end - y));
                }
            }
        }

        None
    }

    fn common_prefix(&self, a: Range<usize>, b: Range<usize>) -> usize {
        self.a[a]
            .iter()
            .zip(&self.b[b])
            .take_while(|(left, right)| left == right)
            .count()
    }

    fn common_suffix(&self, a: Range<usize>, b: Range<usize>) -> usize {
        self.a[a]
            .iter()
            .rev()
            .zip(self.b[b].iter().rev())
            .take_while(|(left, right)| left == right)
            .count()
    }

    fn disjoint(&self, a: Range<usize>, b: Range<usize>) -> bool {
        let left = self.a[a].iter().collect::<HashSet<_>>();
        !self.b[b].iter().any(|item| left.contains(item))
    }
}

/// Depth at which the two searches are guaranteed to have met
fn max_depth(n: usize, m: usize) -> usize {
    (n + m + 1) / 2 + 1
}

/// Furthest-reaching offsets indexed by diagonal, negative diagonals included
#[derive(Debug)]
struct Frontier {
    offset: isize,
    v: Vec<usize>,
}

impl Frontier {
    fn new(depth: usize) -> Self {
        Frontier {
            offset: depth as isize,
            v: vec![0; 2 * depth + 1],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}
