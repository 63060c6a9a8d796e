use std::{borrow::Cow, ops::Range, sync::LazyLock};

use regex::{Captures, Regex};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opens an encoded mention, followed by the display name.
pub const MENTION_PREFIX: &str = "@[";
/// Separates the display name from the identifier.
pub const MENTION_SEPARATOR: &str = "](";
/// Closes an encoded mention.
pub const MENTION_SUFFIX: &str = ")";

// `.` of the original pattern: anything but a line terminator.
const NAME_PATTERN: &str = r"[^\n\r\x{2028}\x{2029}]+";
const ID_PATTERN: &str = "[0-9]*";

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?i){}(?P<name>{NAME_PATTERN}){}(?P<id>{ID_PATTERN}){}",
        regex::escape(MENTION_PREFIX),
        regex::escape(MENTION_SEPARATOR),
        regex::escape(MENTION_SUFFIX),
    );

    Regex::new(&pattern).expect("mention pattern is built from escaped constants")
});

/// The compiled pattern recognising `@[name](id)` tokens.
///
/// The name is greedy: `@[a](1) and @[b](2)` is a single mention named
/// `a](1) and @[b`, exactly as a backtracking engine would match it.
#[must_use]
pub fn mention_regex() -> &'static Regex { &MENTION_REGEX }

/// A mention decoded from its textual token.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MentionData {
    /// The complete encoded token, e.g. `@[Alice](42)`.
    pub original: String,
    pub name: String,
    /// Digits only, possibly empty.
    pub id: String,
}

impl MentionData {
    fn from_captures(captures: &Captures<'_>) -> Option<Self> {
        let capture = |name: &str| captures.name(name).map_or("", |m| m.as_str()).to_owned();

        Some(Self {
            original: captures.get(0)?.as_str().to_owned(),
            name: capture("name"),
            id: capture("id"),
        })
    }
}

/// An item offered by a suggestion list, turned into a token by
/// [`get_mention_value`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
}

impl Suggestion {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A recognised mention together with its byte range in the searched string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionMatch {
    pub range: Range<usize>,
    pub data: MentionData,
}

/// Iterates over the mentions of `value` from left to right. Matches never
/// overlap.
pub fn find_mentions(value: &str) -> impl Iterator<Item = MentionMatch> + '_ {
    mention_regex().captures_iter(value).filter_map(|captures| {
        let range = captures.get(0)?.range();
        let data = MentionData::from_captures(&captures)?;

        Some(MentionMatch { range, data })
    })
}

/// Encodes a suggestion as a mention token.
///
/// ```
/// use mention_parts::{Suggestion, get_mention_value};
///
/// assert_eq!(get_mention_value(&Suggestion::new("42", "Alice")), "@[Alice](42)");
/// ```
#[must_use]
pub fn get_mention_value(suggestion: &Suggestion) -> String {
    format!(
        "{MENTION_PREFIX}{}{MENTION_SEPARATOR}{}{MENTION_SUFFIX}",
        suggestion.name, suggestion.id
    )
}

/// Replaces every mention token of `value` with the output of `replacer`.
/// Text outside of mentions is copied as-is and nothing is allocated when
/// `value` contains no mentions.
///
/// ```
/// use mention_parts::replace_mention_values;
///
/// let replaced = replace_mention_values("Hi @[Bob](7)!", |mention| mention.name.clone());
/// assert_eq!(replaced, "Hi Bob!");
/// ```
pub fn replace_mention_values<F>(value: &str, mut replacer: F) -> Cow<'_, str>
where
    F: FnMut(&MentionData) -> String,
{
    let mut mentions = find_mentions(value).peekable();
    if mentions.peek().is_none() {
        return Cow::Borrowed(value);
    }

    let mut result = String::with_capacity(value.len());
    let mut last_end = 0;
    for mention in mentions {
        result.push_str(&value[last_end..mention.range.start]);
        result.push_str(&replacer(&mention.data));
        last_end = mention.range.end;
    }
    result.push_str(&value[last_end..]);

    Cow::Owned(result)
}
