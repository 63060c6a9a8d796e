use std::fmt::Display;

use thiserror::Error;

/// The two inputs of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSide {
    Original,
    Changed,
}

impl Display for TextSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextSide::Original => write!(f, "original"),
            TextSide::Changed => write!(f, "changed"),
        }
    }
}

/// Error type for change records that do not describe the diffed texts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Replaying the records does not give back one of the inputs
    #[error(
        "Invalid diff: the change records diverge from the {side} text at character {position} \
         (records cover {covered} characters, the text has {expected})"
    )]
    Diverges {
        side: TextSide,
        /// Index of the first character where the replayed text differs
        position: usize,
        /// Number of characters produced by replaying the records
        covered: usize,
        /// Number of characters in the input text
        expected: usize,
    },
}
