//! Content file loading tests

use std::io::Write;

use lovenote_core::{CardContent, CardError, CardMachine, Timings};
use tempfile::NamedTempFile;

fn write_json(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_custom_card() {
    let file = write_json(
        r#"{
            "hero": { "greeting": "Hey you" },
            "gallery": {
                "cards": [
                    { "id": 10, "image": "/assets/a.png", "message": "first" },
                    { "id": 20, "image": "/assets/b.png", "message": "second", "delay_secs": 0.3 }
                ]
            },
            "meta": { "title": "For you" }
        }"#,
    );

    let content = CardContent::load(file.path()).unwrap();
    assert_eq!(content.hero.greeting, "Hey you");
    assert_eq!(content.meta.title, "For you");
    assert_eq!(content.gallery.cards.len(), 2);
    assert_eq!(content.gallery.cards[1].delay_secs, 0.3);
    // Missing sections keep their defaults
    assert_eq!(content.letter.stamp_top, "LOVE");

    let machine = CardMachine::new(content, Timings::default());
    assert_eq!(machine.deck().len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CardContent::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CardError::Io(_)));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let file = write_json("{ not json");
    let err = CardContent::load(file.path()).unwrap_err();
    assert!(matches!(err, CardError::Parse(_)));
}

#[test]
fn test_invalid_card_is_rejected_on_load() {
    let file = write_json(r#"{ "letter": { "signature": "" } }"#);
    let err = CardContent::load(file.path()).unwrap_err();
    assert!(matches!(err, CardError::InvalidContent(_)));
}

#[test]
fn test_default_card_round_trips_through_json() {
    let json = serde_json::to_string_pretty(&CardContent::default()).unwrap();
    let file = write_json(&json);
    assert_eq!(CardContent::load(file.path()).unwrap(), CardContent::default());
}
