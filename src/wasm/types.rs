use wasm_bindgen::prelude::*;

use crate::{AddedText, ChangePositions, MentionData, Part, PlainTextParts, Position};

/// Wrapper type to expose `MentionData` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsMentionData {
    original: String,
    name: String,
    id: String,
}

#[wasm_bindgen]
impl JsMentionData {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(original: String, name: String, id: String) -> Self { Self { original, name, id } }

    #[must_use]
    pub fn original(&self) -> String { self.original.clone() }

    #[must_use]
    pub fn name(&self) -> String { self.name.clone() }

    #[must_use]
    pub fn id(&self) -> String { self.id.clone() }
}

impl From<MentionData> for JsMentionData {
    fn from(mention: MentionData) -> Self {
        JsMentionData {
            original: mention.original,
            name: mention.name,
            id: mention.id,
        }
    }
}

impl From<JsMentionData> for MentionData {
    fn from(mention: JsMentionData) -> Self {
        MentionData {
            original: mention.original,
            name: mention.name,
            id: mention.id,
        }
    }
}

/// Wrapper type to expose `Part` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsPart {
    text: String,
    position: Position,
    data: Option<JsMentionData>,
}

#[wasm_bindgen]
impl JsPart {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(text: String, position: Position, data: Option<JsMentionData>) -> Self {
        Self {
            text,
            position,
            data,
        }
    }

    #[must_use]
    pub fn text(&self) -> String { self.text.clone() }

    #[must_use]
    pub fn position(&self) -> Position { self.position }

    #[must_use]
    pub fn data(&self) -> Option<JsMentionData> { self.data.clone() }
}

impl From<Part> for JsPart {
    fn from(part: Part) -> Self {
        JsPart {
            text: part.text,
            position: part.position,
            data: part.data.map(Into::into),
        }
    }
}

impl From<JsPart> for Part {
    fn from(part: JsPart) -> Self {
        Part {
            text: part.text,
            position: part.position,
            data: part.data.map(Into::into),
        }
    }
}

/// Wrapper type to expose `PlainTextParts` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsPlainTextParts {
    parts: Vec<JsPart>,
    plain_text: String,
}

#[wasm_bindgen]
impl JsPlainTextParts {
    #[must_use]
    pub fn parts(&self) -> Vec<JsPart> { self.parts.clone() }

    #[wasm_bindgen(js_name = plainText)]
    #[must_use]
    pub fn plain_text(&self) -> String { self.plain_text.clone() }
}

impl From<PlainTextParts> for JsPlainTextParts {
    fn from(parsed: PlainTextParts) -> Self {
        JsPlainTextParts {
            parts: parsed.parts.into_iter().map(Into::into).collect(),
            plain_text: parsed.plain_text,
        }
    }
}

/// Wrapper type to expose `AddedText` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsAddedText {
    start: usize,
    value: String,
}

#[wasm_bindgen]
impl JsAddedText {
    #[must_use]
    pub fn start(&self) -> usize { self.start }

    #[must_use]
    pub fn value(&self) -> String { self.value.clone() }
}

impl From<AddedText> for JsAddedText {
    fn from(added: AddedText) -> Self {
        JsAddedText {
            start: added.start,
            value: added.value,
        }
    }
}

/// Wrapper type to expose `ChangePositions` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsChangePositions {
    deleted: Vec<Position>,
    added: Vec<JsAddedText>,
}

#[wasm_bindgen]
impl JsChangePositions {
    #[must_use]
    pub fn deleted(&self) -> Vec<Position> { self.deleted.clone() }

    #[must_use]
    pub fn added(&self) -> Vec<JsAddedText> { self.added.clone() }
}

impl From<ChangePositions> for JsChangePositions {
    fn from(positions: ChangePositions) -> Self {
        JsChangePositions {
            deleted: positions.deleted,
            added: positions.added.into_iter().map(Into::into).collect(),
        }
    }
}
