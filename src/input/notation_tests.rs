use super::*;
use proptest::prelude::*;

fn keys(events: &[RawKeyEvent]) -> Vec<&str> {
    events.iter().map(|e| e.key.as_str()).collect()
}

#[test]
fn test_plain_characters() {
    let events = parse_key_notation("5dd").unwrap();
    assert_eq!(keys(&events), vec!["5", "d", "d"]);
    assert!(events.iter().all(|e| !e.has_host_modifier()));
}

#[test]
fn test_uppercase_sets_shift() {
    let events = parse_key_notation("gG").unwrap();
    assert!(!events[0].shift);
    assert!(events[1].shift);
}

#[test]
fn test_named_keys() {
    let events = parse_key_notation("<Esc><CR><BS><Space><Tab><Del>").unwrap();
    assert_eq!(
        keys(&events),
        vec!["Escape", "Enter", "Backspace", " ", "Tab", "Delete"]
    );
}

#[test]
fn test_named_keys_are_case_insensitive() {
    let events = parse_key_notation("<esc><ESCAPE><cr>").unwrap();
    assert_eq!(keys(&events), vec!["Escape", "Escape", "Enter"]);
}

#[test]
fn test_control_prefix() {
    let events = parse_key_notation("i<C-o>w").unwrap();
    assert_eq!(keys(&events), vec!["i", "o", "w"]);
    assert!(events[1].ctrl);
    assert!(!events[0].ctrl && !events[2].ctrl);
}

#[test]
fn test_stacked_prefixes() {
    let events = parse_key_notation("<C-S-Left><A-x><M-v><D-c>").unwrap();
    assert_eq!(events[0].key, "ArrowLeft");
    assert!(events[0].ctrl && events[0].shift);
    assert!(events[1].alt);
    assert!(events[2].meta);
    assert!(events[3].meta);
}

#[test]
fn test_lt_is_literal_angle_bracket() {
    let events = parse_key_notation("a<lt>b").unwrap();
    assert_eq!(keys(&events), vec!["a", "<", "b"]);
}

#[test]
fn test_brackets_followed_by_text() {
    let events = parse_key_notation("<Esc>`a").unwrap();
    assert_eq!(keys(&events), vec!["Escape", "`", "a"]);
}

#[test]
fn test_unterminated_bracket_is_error() {
    let err = parse_key_notation("dd<Esc").unwrap_err();
    match err {
        ModalKeysError::InvalidKeyNotation { position, reason } => {
            assert_eq!(position, 2);
            assert!(reason.contains("unterminated"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unknown_name_is_error() {
    let err = parse_key_notation("<Bogus>").unwrap_err();
    assert!(err.to_string().contains("unknown key name 'Bogus'"));
}

#[test]
fn test_empty_brackets_is_error() {
    assert!(parse_key_notation("<>").is_err());
}

#[test]
fn test_empty_input() {
    assert!(parse_key_notation("").unwrap().is_empty());
}

// Any text without '<' maps one character to one event.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_plain_text_is_one_event_per_char(text in "[^<]{0,40}") {
        let events = parse_key_notation(&text).unwrap();
        prop_assert_eq!(events.len(), text.chars().count());
        for (event, ch) in events.iter().zip(text.chars()) {
            prop_assert_eq!(event.key.clone(), ch.to_string());
        }
    }
}
