//! Export tests (blocks → ChatMD)

use crate::common::load_fixture;
use chatmd_babel::{
    generate, parse, try_generate, Block, Choice, FormatError, ResponseBlock, WelcomeBlock,
};
use insta::assert_snapshot;

fn script() -> Vec<Block> {
    vec![
        Block::Welcome(WelcomeBlock {
            title: "Mon Chatbot".to_string(),
            content: "Bienvenue !".to_string(),
            choices: vec![Choice::new("Horaires", "Horaires")],
            yaml: "gestionnaire: moi".to_string(),
        }),
        Block::Response(ResponseBlock {
            title: "Horaires".to_string(),
            triggers: vec!["horaires".to_string(), "ouverture".to_string()],
            content: "Ouvert de 9h à 18h.".to_string(),
            choices: vec![
                Choice::new("Retour", "Mon Chatbot"),
                Choice::new("Sans cible", ""),
            ],
        }),
        Block::Response(ResponseBlock {
            title: "Contact".to_string(),
            triggers: vec![],
            content: "Écrivez-nous.".to_string(),
            choices: vec![],
        }),
    ]
}

#[test]
fn test_generate_layout() {
    assert_snapshot!(generate(&script()), @r###"
    ---
    gestionnaire: moi
    ---

    # Mon Chatbot
    Bienvenue !
    1. [Horaires](Horaires)


    ## Horaires
    - horaires
    - ouverture
    Ouvert de 9h à 18h.
    1. [Retour](Mon Chatbot)


    ## Contact
    Écrivez-nous.
    "###);
}

#[test]
fn test_kitchensink_is_a_fixed_point() {
    let source = load_fixture("kitchensink.md");
    assert_eq!(generate(&parse(&source)), source);
}

#[test]
fn test_empty_target_choice_is_dropped() {
    let text = generate(&script());
    assert!(!text.contains("Sans cible"));

    let reparsed = parse(&text);
    assert_eq!(
        reparsed[1].choices(),
        &[Choice::new("Retour", "Mon Chatbot")]
    );
}

#[test]
fn test_no_header_without_yaml() {
    let blocks = vec![Block::Welcome(WelcomeBlock::new("Bot"))];
    assert_eq!(generate(&blocks), "# Bot\n");
}

#[test]
fn test_generate_failures_are_soft() {
    assert_eq!(generate(&[]), "");
    assert_eq!(try_generate(&[]), Err(FormatError::EmptyInput));

    let headless = vec![Block::Response(ResponseBlock::new("Orphan"))];
    assert_eq!(generate(&headless), "");
    assert_eq!(try_generate(&headless), Err(FormatError::MissingWelcome));
}
