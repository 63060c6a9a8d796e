mod diff_error;

pub use diff_error::{DiffError, TextSide};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    diffs::{BuiltinDiff, CharacterChange, Differ},
    parts::Position,
};

/// Text inserted into the original string right before character `start`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddedText {
    pub start: usize,
    pub value: String,
}

/// The edits between two strings expressed in the character coordinates of
/// the original string.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangePositions {
    /// Ascending, non-overlapping ranges of removed characters.
    pub deleted: Vec<Position>,
    pub added: Vec<AddedText>,
}

impl ChangePositions {
    /// Walks the change records with a cursor into the original string.
    ///
    /// Removed runs are recorded at the cursor and move it forward, added runs
    /// are recorded at the cursor without moving it. Records are taken in the
    /// order they arrive: the built-in diffs report a removal before the
    /// addition replacing it, so the insertion lands after the removed range.
    #[must_use]
    pub fn from_changes(changes: &[CharacterChange]) -> Self {
        let mut positions = Self::default();
        let mut original_cursor = 0;

        for change in changes {
            match change {
                CharacterChange::Equal(_) => original_cursor += change.char_count(),
                CharacterChange::Removed(_) => {
                    let end = original_cursor + change.char_count();
                    positions.deleted.push(Position::new(original_cursor, end));
                    original_cursor = end;
                }
                CharacterChange::Added(value) => positions.added.push(AddedText {
                    start: original_cursor,
                    value: value.clone(),
                }),
            }
        }

        positions
    }

    /// Total number of removed characters.
    #[must_use]
    pub fn deleted_len(&self) -> usize { self.deleted.iter().map(Position::len).sum() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.deleted.is_empty() && self.added.is_empty() }
}

/// Finds the characters deleted from and inserted into `original_text` to get
/// `changed_text`, using Myers' diff.
///
/// ```
/// use mention_parts::{AddedText, Position, get_changed_positions};
///
/// let positions = get_changed_positions("abcdef", "abf");
/// assert_eq!(positions.deleted, vec![Position::new(2, 5)]);
/// assert!(positions.added.is_empty());
///
/// let positions = get_changed_positions("ab", "aXb");
/// assert!(positions.deleted.is_empty());
/// assert_eq!(positions.added, vec![AddedText { start: 1, value: "X".to_owned() }]);
/// ```
#[must_use]
pub fn get_changed_positions(original_text: &str, changed_text: &str) -> ChangePositions {
    let changes = (*BuiltinDiff::Myers)(original_text, changed_text);
    log::trace!("Diff produced {} change record(s)", changes.len());

    ChangePositions::from_changes(&changes)
}

/// Like [`get_changed_positions`] but with a caller-supplied diff.
///
/// # Errors
///
/// [`DiffError::Diverges`] if the records returned by `diff` do not
/// reproduce `original_text` from their equal and removed runs, or
/// `changed_text` from their equal and added runs.
pub fn get_changed_positions_with_diff(
    original_text: &str,
    changed_text: &str,
    diff: &Differ,
) -> Result<ChangePositions, DiffError> {
    let changes = diff(original_text, changed_text);

    verify_side(&changes, original_text, TextSide::Original)?;
    verify_side(&changes, changed_text, TextSide::Changed)?;

    Ok(ChangePositions::from_changes(&changes))
}

fn verify_side(changes: &[CharacterChange], text: &str, side: TextSide) -> Result<(), DiffError> {
    let replayed = changes
        .iter()
        .filter(|change| match change {
            CharacterChange::Equal(_) => true,
            CharacterChange::Removed(_) => side == TextSide::Original,
            CharacterChange::Added(_) => side == TextSide::Changed,
        })
        .map(CharacterChange::text)
        .collect::<String>();

    if replayed == text {
        return Ok(());
    }

    let error = DiffError::Diverges {
        side,
        position: replayed
            .chars()
            .zip(text.chars())
            .take_while(|(replayed, expected)| replayed == expected)
            .count(),
        covered: replayed.chars().count(),
        expected: text.chars().count(),
    };
    log::debug!("Rejecting diff: {error}");

    Err(error)
}
