use std::ops::Deref;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

mod character_change;
mod common_affix;
mod lcs;
mod myers;

pub use character_change::CharacterChange;

/// A character-level diff: the ordered change records turning the first
/// string into the second.
pub type Differ = dyn Fn(&str, &str) -> Vec<CharacterChange>;

/// Diff algorithms shipped with the crate. Both work on characters and return
/// records with consecutive changes of the same kind merged into runs. Where
/// text is replaced, the removal is always reported before the addition.
///
/// ```
/// use mention_parts::{BuiltinDiff, CharacterChange};
///
/// let changes = (*BuiltinDiff::Myers)("ab", "aXb");
/// assert_eq!(
///     changes,
///     vec![
///         CharacterChange::Equal("a".to_owned()),
///         CharacterChange::Added("X".to_owned()),
///         CharacterChange::Equal("b".to_owned()),
///     ]
/// );
/// ```
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinDiff {
    /// Myers' O((N+M)D) algorithm.
    #[default]
    Myers,
    /// Table-based longest common subsequence, quadratic in time and space.
    Lcs,
}

impl Deref for BuiltinDiff {
    type Target = Differ;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinDiff::Myers => &myers::diff,
            BuiltinDiff::Lcs => &lcs::diff,
        }
    }
}
