//! JSON format tests, through the registry

use crate::common::load_fixture;
use chatmd_babel::{FormatError, FormatRegistry};
use serde_json::Value;
use std::collections::HashMap;

#[test]
fn test_chatmd_to_json_records() {
    let registry = FormatRegistry::default();
    let blocks = registry
        .parse(&load_fixture("kitchensink.md"), "chatmd")
        .unwrap();
    let output = registry.serialize(&blocks, "json").unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["type"], "welcome");
    assert_eq!(records[0]["id"], "assistant-de-révision");
    assert_eq!(records[1]["type"], "response");
    assert_eq!(records[1]["triggers"][2], "leçon");
    assert_eq!(records[4]["choices"][1]["target"], "Aide inexistante");
}

#[test]
fn test_json_back_to_chatmd() {
    let registry = FormatRegistry::default();
    let source = load_fixture("kitchensink.md");

    let blocks = registry.parse(&source, "chatmd").unwrap();
    let json = registry.serialize(&blocks, "json").unwrap();
    let back = registry.parse(&json, "json").unwrap();

    assert_eq!(back, blocks);
    assert_eq!(registry.serialize(&back, "chatmd").unwrap(), source);
}

#[test]
fn test_missing_fields_take_defaults() {
    let registry = FormatRegistry::default();
    let source = r#"[
        {"type": "welcome", "title": "Bot"},
        {"type": "response", "title": "Aide", "id": "ignored"}
    ]"#;
    let blocks = registry.parse(source, "json").unwrap();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks.welcome().yaml, "");
    assert_eq!(blocks.get(1).unwrap().id(), "aide");
    assert_eq!(
        registry.serialize(&blocks, "chatmd").unwrap(),
        "# Bot\n\n\n## Aide\n"
    );
}

#[test]
fn test_second_welcome_is_rejected() {
    let registry = FormatRegistry::default();
    let source = r#"[{"type": "welcome", "title": "A"}, {"type": "welcome", "title": "B"}]"#;
    assert_eq!(
        registry.parse(source, "json"),
        Err(FormatError::DuplicateWelcome(1))
    );
}

#[test]
fn test_compact_output_option() {
    let registry = FormatRegistry::default();
    let blocks = registry.parse("# Bot\nSalut", "chatmd").unwrap();

    let mut options = HashMap::new();
    options.insert("pretty".to_string(), "no".to_string());
    let output = registry
        .serialize_with_options(&blocks, "json", &options)
        .unwrap();
    assert!(!output.contains('\n'));
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "type": "welcome",
            "id": "bot",
            "title": "Bot",
            "content": "Salut",
            "choices": [],
            "yaml": ""
        }])
    );
}
