//! Round-trip properties between `parse` and `generate`
//!
//! Generated scripts stay inside the lossless class: complete choices, no `## ` inside
//! content, trimmed content whose first line is never a `- ` line.

use chatmd_babel::{generate, parse, Block, Choice, ResponseBlock, WelcomeBlock};
use proptest::prelude::*;
use proptest::string::string_regex;

fn label() -> impl Strategy<Value = String> {
    string_regex("[A-Za-z][A-Za-z0-9 ]{0,10}[A-Za-z0-9]").unwrap()
}

fn content() -> impl Strategy<Value = String> {
    let line = string_regex("[A-Za-zé]([A-Za-z0-9é .,!?'-]{0,20}[A-Za-z0-9.!?])?").unwrap();
    prop::collection::vec(line, 0..4).prop_map(|lines| lines.join("\n"))
}

fn choices() -> impl Strategy<Value = Vec<Choice>> {
    prop::collection::vec(
        (label(), label()).prop_map(|(text, target)| Choice::new(text, target)),
        0..3,
    )
}

fn yaml() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::collection::vec(string_regex("[a-z]{1,8}: [a-z0-9]{1,8}").unwrap(), 1..3)
            .prop_map(|lines| lines.join("\n")),
    ]
}

fn welcome() -> impl Strategy<Value = WelcomeBlock> {
    (label(), content(), choices(), yaml()).prop_map(|(title, content, choices, yaml)| {
        WelcomeBlock {
            title,
            content,
            choices,
            yaml,
        }
    })
}

fn response() -> impl Strategy<Value = ResponseBlock> {
    (
        label(),
        prop::collection::vec(label(), 0..3),
        content(),
        choices(),
    )
        .prop_map(|(title, triggers, content, choices)| ResponseBlock {
            title,
            triggers,
            content,
            choices,
        })
}

fn script() -> impl Strategy<Value = Vec<Block>> {
    (welcome(), prop::collection::vec(response(), 0..5)).prop_map(|(welcome, responses)| {
        let mut blocks = vec![Block::Welcome(welcome)];
        blocks.extend(responses.into_iter().map(Block::Response));
        blocks
    })
}

proptest! {
    #[test]
    fn parse_inverts_generate(blocks in script()) {
        let text = generate(&blocks);
        prop_assert_eq!(parse(&text), blocks);
    }

    #[test]
    fn generate_is_idempotent(blocks in script()) {
        let once = generate(&blocks);
        let twice = generate(&parse(&once));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn ids_follow_titles(blocks in script()) {
        let reparsed = parse(&generate(&blocks));
        for (original, parsed) in blocks.iter().zip(reparsed.iter()) {
            prop_assert_eq!(original.id(), parsed.id());
        }
    }

    #[test]
    fn any_text_yields_a_welcome_block(text in "\\PC{0,200}") {
        let blocks = parse(&text);
        prop_assert!(!blocks.is_empty());
        prop_assert!(blocks[0].is_welcome());
        prop_assert!(blocks[1..].iter().all(|block| !block.is_welcome()));
    }
}

#[test]
fn test_header_preserved_byte_for_byte() {
    let source = "---\ntitre: Bot\nstyle: a{b:c}\n---\n\n# Bot\nSalut";
    let blocks = parse(source);
    assert_eq!(blocks[0].yaml(), Some("titre: Bot\nstyle: a{b:c}"));
    assert_eq!(generate(&blocks), source);
}

#[test]
fn test_leading_dash_content_becomes_triggers() {
    // Outside the lossless class: a trigger-less response whose content opens with a
    // `- ` line reads back as triggers.
    let blocks = vec![
        Block::Welcome(WelcomeBlock::new("Bot")),
        Block::Response(ResponseBlock {
            title: "Liste".to_string(),
            content: "- item".to_string(),
            ..Default::default()
        }),
    ];
    let reparsed = parse(&generate(&blocks));
    assert_eq!(reparsed[1].triggers(), &["item".to_string()]);
    assert_eq!(reparsed[1].content(), "");
}
