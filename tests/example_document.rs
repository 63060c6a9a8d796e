use std::{fs, path::Path};

use mention_parts::{AddedText, ChangePositions, MentionData, Part, PlainTextParts, Position};
use pretty_assertions::assert_eq;
use serde::Deserialize;

/// A mention-encoded value together with how it should be rendered.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MentionExample {
    description: String,
    trigger: String,
    value: String,
    plain_text: String,
    without_markup: String,
    mentions: Vec<ExpectedMention>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
struct ExpectedMention {
    name: String,
    id: String,
}

impl MentionExample {
    #[must_use]
    pub fn trigger(&self) -> &str { &self.trigger }

    #[must_use]
    pub fn value(&self) -> &str { &self.value }

    #[must_use]
    pub fn without_markup(&self) -> &str { &self.without_markup }

    #[must_use]
    pub fn description(&self) -> &str { &self.description }

    /// Asserts that `parsed` renders the example and contains its mentions.
    ///
    /// # Panics
    ///
    /// If the plain text, the mentions or the part positions are off.
    pub fn assert_parsed(&self, parsed: &PlainTextParts) {
        assert_eq!(parsed.plain_text, self.plain_text, "{}", self.description);
        assert_eq!(
            parsed
                .parts
                .iter()
                .filter_map(|part| part.data.as_ref())
                .map(|mention: &MentionData| ExpectedMention {
                    name: mention.name.clone(),
                    id: mention.id.clone(),
                })
                .collect::<Vec<_>>(),
            self.mentions,
            "{}",
            self.description
        );

        let mut next_start = 0;
        for part in &parsed.parts {
            assert_eq!(
                part.position,
                Position::new(next_start, next_start + part.text.chars().count()),
                "{}",
                self.description
            );
            next_start = part.position.end;
        }
        assert_eq!(next_start, self.plain_text.chars().count(), "{}", self.description);
        assert!(parsed.parts.iter().all(|part: &Part| !part.text.is_empty()));
    }
}

/// Two consecutive states of a text input and the expected change positions.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditExample {
    description: String,
    original: String,
    changed: String,
    deleted: Vec<(usize, usize)>,
    added: Vec<ExpectedAddition>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
struct ExpectedAddition {
    start: usize,
    value: String,
}

impl EditExample {
    #[must_use]
    pub fn original(&self) -> &str { &self.original }

    #[must_use]
    pub fn changed(&self) -> &str { &self.changed }

    /// # Panics
    ///
    /// If `positions` differ from the expected ones.
    pub fn assert_positions(&self, positions: &ChangePositions) {
        let expected = ChangePositions {
            deleted: self
                .deleted
                .iter()
                .map(|&(start, end)| Position::new(start, end))
                .collect(),
            added: self
                .added
                .iter()
                .map(|added| AddedText {
                    start: added.start,
                    value: added.value.clone(),
                })
                .collect(),
        };

        assert_eq!(positions, &expected, "{}", self.description);
    }
}

/// Loads every document of every `.yml` file in `tests/examples` whose name
/// starts with `prefix`.
///
/// # Panics
///
/// If a file cannot be read or a document cannot be parsed.
#[must_use]
pub fn load_examples<T>(prefix: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let examples_dir = Path::new("tests/examples");
    let mut paths = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some("yml")
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(prefix))
        })
        .collect::<Vec<_>>();
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        let file = fs::File::open(&path).expect("Failed to open example file");
        for document in serde_yaml::Deserializer::from_reader(file) {
            documents.push(T::deserialize(document).expect("Failed to deserialize document"));
        }
    }

    assert!(!documents.is_empty(), "No examples found for {prefix}");

    documents
}
