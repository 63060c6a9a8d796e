#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One record of a character diff, carrying the affected text.
///
/// Records of the same kind can be joined when they follow each other.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterChange {
    /// Present in both strings.
    Equal(String),
    /// Present only in the original string.
    Removed(String),
    /// Present only in the changed string.
    Added(String),
}

impl CharacterChange {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            CharacterChange::Equal(text)
            | CharacterChange::Removed(text)
            | CharacterChange::Added(text) => text,
        }
    }

    #[must_use]
    pub fn char_count(&self) -> usize { self.text().chars().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text().is_empty() }

    #[must_use]
    pub fn is_same_kind(&self, other: &CharacterChange) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Extends the change with the text of a following change. Only changes of
    /// the same kind can be joined, otherwise the function will panic.
    fn join(&mut self, other: &CharacterChange) {
        debug_assert!(
            self.is_same_kind(other),
            "Cannot join changes of different kinds. This should have been handled before \
             calling this function."
        );

        match (self, other) {
            (CharacterChange::Equal(text), CharacterChange::Equal(other))
            | (CharacterChange::Removed(text), CharacterChange::Removed(other))
            | (CharacterChange::Added(text), CharacterChange::Added(other)) => {
                text.push_str(other);
            }
            _ => unreachable!("Only changes of the same kind can be joined"),
        }
    }
}

/// Merges consecutive changes of the same kind and drops empty ones.
///
/// The removed and added text between two equal runs forms a hunk. Each hunk
/// is emitted as a single removal followed by a single addition, however the
/// diff interleaved them.
pub fn join_runs<I>(changes: I) -> Vec<CharacterChange>
where
    I: IntoIterator<Item = CharacterChange>,
{
    let mut result: Vec<CharacterChange> = Vec::new();
    let mut removed = String::new();
    let mut added = String::new();

    for change in changes.into_iter().filter(|change| !change.is_empty()) {
        match change {
            CharacterChange::Removed(text) => removed.push_str(&text),
            CharacterChange::Added(text) => added.push_str(&text),
            CharacterChange::Equal(_) => {
                flush_hunk(&mut result, &mut removed, &mut added);
                match result.last_mut() {
                    Some(last) if last.is_same_kind(&change) => last.join(&change),
                    _ => result.push(change),
                }
            }
        }
    }
    flush_hunk(&mut result, &mut removed, &mut added);

    result
}

fn flush_hunk(result: &mut Vec<CharacterChange>, removed: &mut String, added: &mut String) {
    if !removed.is_empty() {
        result.push(CharacterChange::Removed(std::mem::take(removed)));
    }
    if !added.is_empty() {
        result.push(CharacterChange::Added(std::mem::take(added)));
    }
}
