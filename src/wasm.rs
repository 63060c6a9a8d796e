//! Expose the crate's functionality to WebAssembly.
mod types;

pub use types::{JsAddedText, JsChangePositions, JsMentionData, JsPart, JsPlainTextParts};
use wasm_bindgen::prelude::*;

use crate::{BuiltinDiff, ChangePositions, Part, Suggestion};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::get_parts` for splitting an encoded value.
#[wasm_bindgen(js_name = getParts)]
#[must_use]
pub fn get_parts(trigger: &str, value: Option<String>) -> JsPlainTextParts {
    set_panic_hook();

    crate::get_parts(trigger, value.as_deref()).into()
}

/// WASM wrapper around `crate::get_value` for rebuilding an encoded value.
#[wasm_bindgen(js_name = getValue)]
#[must_use]
pub fn get_value(parts: Vec<JsPart>) -> String {
    set_panic_hook();

    let parts = parts.into_iter().map(Part::from).collect::<Vec<_>>();
    crate::get_value(&parts)
}

/// WASM wrapper around `crate::get_mention_value` for encoding a suggestion.
#[wasm_bindgen(js_name = getMentionValue)]
#[must_use]
pub fn get_mention_value(id: String, name: String) -> String {
    set_panic_hook();

    crate::get_mention_value(&Suggestion { id, name })
}

/// WASM wrapper around `crate::get_changed_positions`, defaulting to Myers'
/// diff when no algorithm is given.
#[wasm_bindgen(js_name = getChangedPositions)]
#[must_use]
pub fn get_changed_positions(
    original_text: &str,
    changed_text: &str,
    diff: Option<BuiltinDiff>,
) -> JsChangePositions {
    set_panic_hook();

    let changes = (*diff.unwrap_or_default())(original_text, changed_text);
    ChangePositions::from_changes(&changes).into()
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
