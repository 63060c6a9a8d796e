//! Parsing, reconstruction and character diffing of mention-encoded text.
//!
//! A mentions text input stores its value with embedded references such as
//! `@[Alice](42)`. This crate splits such a value into rendered [`Part`]s,
//! rebuilds the encoded value from them, and maps an edit of the rendered text
//! back to deleted ranges and inserted fragments.
//!
//! ```
//! use mention_parts::{get_parts, get_value};
//!
//! let value = "Hi @[Bob](7)!";
//! let parsed = get_parts("@", value);
//!
//! assert_eq!(parsed.plain_text, "Hi @Bob!");
//! assert_eq!(get_value(&parsed.parts), value);
//! ```
//!
//! All offsets are counted in characters (Unicode scalar values).

mod changed_positions;
mod diffs;
mod mention;
mod parts;

pub use changed_positions::{
    AddedText, ChangePositions, DiffError, TextSide, get_changed_positions,
    get_changed_positions_with_diff,
};
pub use diffs::{BuiltinDiff, CharacterChange, Differ};
pub use mention::{
    MENTION_PREFIX, MENTION_SEPARATOR, MENTION_SUFFIX, MentionData, MentionMatch, Suggestion,
    find_mentions, get_mention_value, mention_regex, replace_mention_values,
};
pub use parts::{Part, PlainTextParts, Position, get_mention_part, get_part, get_parts, get_value};

#[cfg(feature = "wasm")]
pub mod wasm;
