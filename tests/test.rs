mod example_document;

use example_document::{EditExample, MentionExample, load_examples};
use mention_parts::{
    BuiltinDiff, Suggestion, find_mentions, get_changed_positions,
    get_changed_positions_with_diff, get_mention_value, get_parts, get_value,
    replace_mention_values,
};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_examples() {
    for example in &load_examples::<MentionExample>("mentions") {
        example.assert_parsed(&get_parts(example.trigger(), example.value()));
    }
}

#[test]
fn test_round_trip_examples() {
    for example in &load_examples::<MentionExample>("mentions") {
        let parsed = get_parts(example.trigger(), example.value());

        assert_eq!(get_value(&parsed.parts), example.value(), "{}", example.description());
    }
}

#[test]
fn test_replace_examples() {
    for example in &load_examples::<MentionExample>("mentions") {
        assert_eq!(
            replace_mention_values(example.value(), |mention| mention.name.clone()),
            example.without_markup(),
            "{}",
            example.description()
        );
    }
}

#[test]
fn test_edit_examples() {
    for example in &load_examples::<EditExample>("edits") {
        example.assert_positions(&get_changed_positions(example.original(), example.changed()));

        for diff in [BuiltinDiff::Myers, BuiltinDiff::Lcs] {
            let positions =
                get_changed_positions_with_diff(example.original(), example.changed(), &*diff)
                    .expect("built-in diffs describe both texts");
            example.assert_positions(&positions);
        }
    }
}

#[test]
fn test_typing_into_a_mention_input() {
    let value = get_mention_value(&Suggestion::new("7", "Bob"));
    let before = get_parts("@", format!("Hi {value}!").as_str());
    assert_eq!(before.plain_text, "Hi @Bob!");

    // The user types ", welcome" before the exclamation mark.
    let after = "Hi @Bob, welcome!";
    let positions = get_changed_positions(&before.plain_text, after);

    assert!(positions.deleted.is_empty());
    assert_eq!(positions.added.len(), 1);
    assert_eq!(positions.added[0].start, 7);
    assert_eq!(positions.added[0].value, ", welcome");

    let edited_part = before
        .parts
        .iter()
        .find(|part| part.position.start < 7 && 7 <= part.position.end)
        .expect("insertion point lies within a part");
    assert!(edited_part.is_mention());
    assert_eq!(edited_part.position.end, 7);
}

#[test]
fn test_decoding_encoded_suggestions() {
    let suggestions = [
        Suggestion::new("1", "Ann"),
        Suggestion::new("", "Nobody"),
        Suggestion::new("300", "Zoë Ångström"),
    ];
    let value = suggestions
        .iter()
        .map(get_mention_value)
        .collect::<Vec<_>>()
        .join("\n");

    let decoded = find_mentions(&value)
        .map(|mention| Suggestion::new(mention.data.id, mention.data.name))
        .collect::<Vec<_>>();

    assert_eq!(decoded, suggestions);
}
