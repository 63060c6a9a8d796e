//! Myers' diff algorithm over characters, adapted from
//! <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! The linear space refinement from the paper is used: the middle snake of
//! an optimal path is found by searching from both corners at once, then both
//! halves are solved recursively.

use std::ops::{Index, IndexMut, Range};

use super::{
    character_change::{CharacterChange, join_runs},
    common_affix::{common_prefix_len, common_suffix_len},
};

/// Diffs `original` against `changed` character by character.
pub fn diff(original: &str, changed: &str) -> Vec<CharacterChange> {
    let old = original.chars().collect::<Vec<_>>();
    let new = changed.chars().collect::<Vec<_>>();

    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut myers = Myers {
        old: &old,
        new: &new,
        vf: V::new(max_d),
        vb: V::new(max_d),
        result: Vec::new(),
    };
    myers.conquer(0..old.len(), 0..new.len());

    join_runs(myers.result)
}

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`.
///
/// `k` can be negative, so the vector is shifted by `offset`, the largest
/// value `k` can take on.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: to_isize(max_d),
            v: vec![0; 2 * max_d],
        }
    }

    fn position(&self, k: isize) -> usize {
        let position = k + self.offset;
        debug_assert!(
            position >= 0 && position < to_isize(self.v.len()),
            "Diagonal {k} is outside of the searched range"
        );

        position.unsigned_abs()
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &Self::Output { &self.v[self.position(k)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let position = self.position(k);
        &mut self.v[position]
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

fn to_usize(value: isize) -> usize { usize::try_from(value).unwrap_or(0) }

struct Myers<'a> {
    old: &'a [char],
    new: &'a [char],
    vf: V,
    vb: V,
    result: Vec<CharacterChange>,
}

impl Myers<'_> {
    fn push_equal(&mut self, old_range: Range<usize>) {
        self.result
            .push(CharacterChange::Equal(self.old[old_range].iter().collect()));
    }

    fn push_removed(&mut self, old_range: Range<usize>) {
        self.result
            .push(CharacterChange::Removed(self.old[old_range].iter().collect()));
    }

    fn push_added(&mut self, new_range: Range<usize>) {
        self.result
            .push(CharacterChange::Added(self.new[new_range].iter().collect()));
    }

    /// Finds the start of the middle snake of an optimal path between the two
    /// ranges, returned as absolute `(old, new)` indices.
    ///
    /// A D-path has D+1 snakes, some of which may be empty. The forward search
    /// starts from the top-left corner, the backward one from the bottom-right,
    /// and they stop as soon as their furthest reaching paths overlap.
    fn find_middle_snake(
        &mut self,
        old_range: Range<usize>,
        new_range: Range<usize>,
    ) -> Option<(usize, usize)> {
        let n = old_range.len();
        let m = new_range.len();

        // By Lemma 1 in the paper, the optimal edit script length is odd or
        // even as `delta` is odd or even.
        let delta = to_isize(n) - to_isize(m);
        let odd = delta & 1 == 1;

        // The initial points at (0, -1) and (N, M+1)
        self.vf[1] = 0;
        self.vb[1] = 0;

        let d_max = to_isize((n + m).div_ceil(2) + 1);
        for d in 0..d_max {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && self.vf[k - 1] < self.vf[k + 1]) {
                    self.vf[k + 1]
                } else {
                    self.vf[k - 1] + 1
                };
                let y = to_usize(to_isize(x) - k);
                let (x0, y0) = (x, y);

                if x < n && y < m {
                    x += common_prefix_len(
                        self.old,
                        old_range.start + x..old_range.end,
                        self.new,
                        new_range.start + y..new_range.end,
                    );
                }
                self.vf[k] = x;

                // Only an odd `delta` can meet a backward path on diagonal k.
                if odd
                    && (k - delta).abs() <= d - 1
                    && self.vf[k] + self.vb[-(k - delta)] >= n
                {
                    return Some((x0 + old_range.start, y0 + new_range.start));
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && self.vb[k - 1] < self.vb[k + 1]) {
                    self.vb[k + 1]
                } else {
                    self.vb[k - 1] + 1
                };
                let mut y = to_usize(to_isize(x) - k);

                if x < n && y < m {
                    let advance = common_suffix_len(
                        self.old,
                        old_range.start..old_range.start + n - x,
                        self.new,
                        new_range.start..new_range.start + m - y,
                    );
                    x += advance;
                    y += advance;
                }
                self.vb[k] = x;

                if !odd && (k - delta).abs() <= d && self.vb[k] + self.vf[-(k - delta)] >= n {
                    return Some((n - x + old_range.start, m - y + new_range.start));
                }
            }
        }

        None
    }

    fn conquer(&mut self, mut old_range: Range<usize>, mut new_range: Range<usize>) {
        let prefix_len = common_prefix_len(self.old, old_range.clone(), self.new, new_range.clone());
        self.push_equal(old_range.start..old_range.start + prefix_len);
        old_range.start += prefix_len;
        new_range.start += prefix_len;

        let suffix_len = common_suffix_len(self.old, old_range.clone(), self.new, new_range.clone());
        let suffix_start = old_range.end - suffix_len;
        old_range.end -= suffix_len;
        new_range.end -= suffix_len;

        if old_range.is_empty() && new_range.is_empty() {
            // nothing left between the prefix and the suffix
        } else if new_range.is_empty() {
            self.push_removed(old_range);
        } else if old_range.is_empty() {
            self.push_added(new_range);
        } else if let Some((x_start, y_start)) =
            self.find_middle_snake(old_range.clone(), new_range.clone())
        {
            self.conquer(old_range.start..x_start, new_range.start..y_start);
            self.conquer(x_start..old_range.end, y_start..new_range.end);
        } else {
            self.push_removed(old_range);
            self.push_added(new_range);
        }

        self.push_equal(suffix_start..suffix_start + suffix_len);
    }
}
