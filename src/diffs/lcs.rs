//! LCS diff algorithm over characters, adapted from
//! <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/lcs.rs>
//!
//! * time: `O(NM)`
//! * space `O(NM)`

use std::{collections::BTreeMap, ops::Range};

use super::{
    character_change::{CharacterChange, join_runs},
    common_affix::{common_prefix_len, common_suffix_len},
};

/// Length of the longest common subsequence of the suffixes starting at
/// `(new, old)`, relative to the compared ranges. Zero entries are omitted.
type Table = BTreeMap<(usize, usize), u32>;

/// Diffs `original` against `changed` character by character.
pub fn diff(original: &str, changed: &str) -> Vec<CharacterChange> {
    let old = original.chars().collect::<Vec<_>>();
    let new = changed.chars().collect::<Vec<_>>();

    let prefix_len = common_prefix_len(&old, 0..old.len(), &new, 0..new.len());
    let suffix_len = common_suffix_len(&old, prefix_len..old.len(), &new, prefix_len..new.len());

    let old_range = prefix_len..old.len() - suffix_len;
    let new_range = prefix_len..new.len() - suffix_len;
    let table = make_table(&old, old_range.clone(), &new, new_range.clone());
    let lookup = |new_idx: usize, old_idx: usize| table.get(&(new_idx, old_idx)).copied().unwrap_or(0);

    let mut result = vec![CharacterChange::Equal(old[..prefix_len].iter().collect())];

    let (mut old_idx, mut new_idx) = (0, 0);
    while old_idx < old_range.len() && new_idx < new_range.len() {
        let old_char = old[old_range.start + old_idx];
        let new_char = new[new_range.start + new_idx];

        if old_char == new_char {
            result.push(CharacterChange::Equal(old_char.to_string()));
            old_idx += 1;
            new_idx += 1;
        } else if lookup(new_idx, old_idx + 1) >= lookup(new_idx + 1, old_idx) {
            result.push(CharacterChange::Removed(old_char.to_string()));
            old_idx += 1;
        } else {
            result.push(CharacterChange::Added(new_char.to_string()));
            new_idx += 1;
        }
    }

    result.push(CharacterChange::Removed(
        old[old_range.start + old_idx..old_range.end].iter().collect(),
    ));
    result.push(CharacterChange::Added(
        new[new_range.start + new_idx..new_range.end].iter().collect(),
    ));
    result.push(CharacterChange::Equal(old[old_range.end..].iter().collect()));

    join_runs(result)
}

fn make_table(old: &[char], old_range: Range<usize>, new: &[char], new_range: Range<usize>) -> Table {
    let mut table = Table::new();

    for i in (0..new_range.len()).rev() {
        for j in (0..old_range.len()).rev() {
            let value = if new[new_range.start + i] == old[old_range.start + j] {
                table.get(&(i + 1, j + 1)).copied().unwrap_or(0) + 1
            } else {
                let below = table.get(&(i + 1, j)).copied().unwrap_or(0);
                let right = table.get(&(i, j + 1)).copied().unwrap_or(0);
                below.max(right)
            };

            if value > 0 {
                table.insert((i, j), value);
            }
        }
    }

    table
}
