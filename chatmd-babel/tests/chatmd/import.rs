//! Import tests (ChatMD → blocks)
//!
//! These tests check the block list produced from ChatMD text, field by field.

use crate::common::load_fixture;
use chatmd_babel::formats::chatmd::{ChatMdFormat, Diagnostic};
use chatmd_babel::{parse, Block, Choice, Format, ParseOptions};

fn response(block: &Block) -> &chatmd_babel::ResponseBlock {
    match block {
        Block::Response(response) => response,
        other => panic!("Expected response block, got {other:?}"),
    }
}

#[test]
fn test_kitchensink_structure() {
    let blocks = parse(&load_fixture("kitchensink.md"));

    let titles: Vec<&str> = blocks.iter().map(Block::title).collect();
    assert_eq!(
        titles,
        vec![
            "Assistant de révision",
            "Révision",
            "Quiz",
            "Bonne réponse",
            "Mauvaise réponse"
        ]
    );
    assert!(blocks[0].is_welcome());
    assert!(blocks[1..].iter().all(|block| !block.is_welcome()));
}

#[test]
fn test_kitchensink_welcome() {
    let blocks = parse(&load_fixture("kitchensink.md"));
    let Block::Welcome(welcome) = &blocks[0] else {
        panic!("Expected welcome block first");
    };

    assert_eq!(
        welcome.yaml,
        "gestionnaire: Équipe pédagogique\nstyle: a{color:red}\nmaths: true"
    );
    assert_eq!(
        welcome.content,
        "Bonjour ! Je suis ton assistant de révision.\n\nQue veux-tu faire ?"
    );
    assert_eq!(
        welcome.choices,
        vec![
            Choice::new("Réviser le cours", "Révision"),
            Choice::new("Faire un quiz", "Quiz"),
        ]
    );
    assert_eq!(blocks[0].id(), "assistant-de-révision");
}

#[test]
fn test_kitchensink_responses() {
    let blocks = parse(&load_fixture("kitchensink.md"));

    let revision = response(&blocks[1]);
    assert_eq!(revision.triggers, vec!["réviser", "cours", "leçon"]);
    assert_eq!(
        revision.content,
        "Voici un résumé du cours.\n\n- Premier point\n- Second point"
    );
    assert_eq!(revision.choices.len(), 2);
    assert_eq!(revision.choices[1].target, "Assistant de révision");

    let bravo = response(&blocks[3]);
    assert!(bravo.triggers.is_empty());
    assert_eq!(bravo.content, "Bravo !");
    assert!(bravo.choices.is_empty());
    assert_eq!(blocks[3].id(), "bonne-réponse");
}

#[test]
fn test_trigger_leading_run_policy() {
    let blocks = parse("# Bot\nHi\n\n## Section\n- a\ncontent\n- b");
    let section = response(&blocks[1]);
    assert_eq!(section.triggers, vec!["a"]);
    assert!(section.content.lines().any(|line| line == "- b"));
}

#[test]
fn test_choices_only_body() {
    let blocks = parse("# Bot\n\n## Menu\n1. [Go](Next)\n2. [Stop](End)");
    let menu = response(&blocks[1]);
    assert_eq!(
        menu.choices,
        vec![Choice::new("Go", "Next"), Choice::new("Stop", "End")]
    );
    assert_eq!(menu.content, "");
}

#[test]
fn test_malformed_header() {
    let blocks = parse("--- no closing marker\n# Title\nHi");
    assert_eq!(blocks[0].yaml(), Some(""));
    assert_eq!(blocks[0].title(), "Title");
    assert_eq!(blocks[0].content(), "Hi");
}

#[test]
fn test_diagnostics_are_collected() {
    let parsed = ChatMdFormat::default().parse_with_diagnostics("---\nopen: true\n# Bot\n## Dangling");
    assert_eq!(
        parsed.diagnostics,
        vec![
            Diagnostic::HeaderMalformed,
            Diagnostic::SectionEmpty {
                index: 1,
                heading: "Dangling".to_string()
            }
        ]
    );
    assert_eq!(parsed.blocks.len(), 1);
}

#[test]
fn test_configured_default_title() {
    let format = ChatMdFormat::new(ParseOptions {
        default_title: "Sans titre".to_string(),
    });
    let blocks = format.parse("Pas de titre ici").unwrap();
    assert_eq!(blocks.welcome().title, "Sans titre");
}

#[test]
fn test_crlf_header_line() {
    let blocks = parse("---\r\nstyle: a\r\n---\r\n# Bot\r\nHi");
    assert_eq!(blocks[0].yaml(), Some("style: a"));
    assert_eq!(blocks[0].title(), "Bot");
    assert_eq!(blocks[0].content(), "Hi");
}
