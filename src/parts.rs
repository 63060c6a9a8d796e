#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::mention::{MentionData, find_mentions};

/// Half-open character range `[start, end)` of rendered text.
#[allow(clippy::unsafe_derive_deserialize)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl Position {
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Position must not end before it starts");

        Self { start, end }
    }

    /// Zero for a position whose fields were set to end before its start.
    #[must_use]
    pub fn len(&self) -> usize { self.end.saturating_sub(self.start) }

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = isEmpty))]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// A contiguous segment of rendered text: either free text or the label of a
/// mention.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Part {
    pub text: String,
    pub position: Position,
    pub data: Option<MentionData>,
}

impl Part {
    #[must_use]
    pub fn is_mention(&self) -> bool { self.data.is_some() }

    /// The encoded form of the part: the mention token for mentions, the text
    /// itself otherwise.
    #[must_use]
    pub fn original(&self) -> &str {
        self.data
            .as_ref()
            .map_or(self.text.as_str(), |mention| mention.original.as_str())
    }
}

/// The result of [`get_parts`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlainTextParts {
    /// Non-empty parts ordered by position, covering the whole plain text.
    pub parts: Vec<Part>,
    /// The rendered text: each mention replaced by its trigger and name.
    pub plain_text: String,
}

/// Creates a free-text part starting at `position_offset`.
#[must_use]
pub fn get_part(text: &str, position_offset: usize) -> Part {
    Part {
        text: text.to_owned(),
        position: Position::new(position_offset, position_offset + text.chars().count()),
        data: None,
    }
}

/// Creates the part rendering `mention` as `trigger` followed by its name.
#[must_use]
pub fn get_mention_part(trigger: &str, mention: &MentionData, position_offset: usize) -> Part {
    let text = format!("{trigger}{}", mention.name);
    let length = text.chars().count();

    Part {
        text,
        position: Position::new(position_offset, position_offset + length),
        data: Some(mention.clone()),
    }
}

/// Splits an encoded `value` into text and mention parts.
///
/// Every mention is rendered as `trigger` followed by its name. A missing
/// value is treated as an empty string.
///
/// ```
/// use mention_parts::{Position, get_parts};
///
/// let parsed = get_parts("@", "Hi @[Bob](7)!");
///
/// assert_eq!(parsed.plain_text, "Hi @Bob!");
/// assert_eq!(parsed.parts[1].text, "@Bob");
/// assert_eq!(parsed.parts[1].position, Position::new(3, 7));
/// assert!(get_parts("@", None).parts.is_empty());
/// ```
#[must_use]
pub fn get_parts<'a>(trigger: &str, value: impl Into<Option<&'a str>>) -> PlainTextParts {
    let value = value.into().unwrap_or_default();
    let mut builder = PartsBuilder::with_capacity(value.len());

    // Text around and between mentions becomes plain parts, empty gaps are
    // skipped by the builder.
    let mut last_end = 0;
    for mention in find_mentions(value) {
        builder.push_text(&value[last_end..mention.range.start]);
        builder.push_mention(trigger, &mention.data);
        last_end = mention.range.end;
    }
    builder.push_text(&value[last_end..]);

    let result = builder.finish();
    log::trace!(
        "Split {} bytes of encoded text into {} part(s)",
        value.len(),
        result.parts.len()
    );

    result
}

/// Joins the encoded form of each part, undoing [`get_parts`].
///
/// ```
/// use mention_parts::{get_parts, get_value};
///
/// let value = "@[Ann](1), meet @[Bob](2)";
/// assert_eq!(get_value(&get_parts("#", value).parts), value);
/// ```
#[must_use]
pub fn get_value(parts: &[Part]) -> String { parts.iter().map(Part::original).collect() }

/// Accumulates parts while tracking the rendered length in characters.
struct PartsBuilder {
    parts: Vec<Part>,
    plain_text: String,
    rendered_length: usize,
}

impl PartsBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            parts: Vec::new(),
            plain_text: String::with_capacity(capacity),
            rendered_length: 0,
        }
    }

    fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.push(get_part(text, self.rendered_length));
        }
    }

    fn push_mention(&mut self, trigger: &str, mention: &MentionData) {
        let part = get_mention_part(trigger, mention, self.rendered_length);
        if !part.text.is_empty() {
            self.push(part);
        }
    }

    fn push(&mut self, part: Part) {
        self.plain_text.push_str(&part.text);
        self.rendered_length = part.position.end;
        self.parts.push(part);
    }

    fn finish(self) -> PlainTextParts {
        PlainTextParts {
            parts: self.parts,
            plain_text: self.plain_text,
        }
    }
}
