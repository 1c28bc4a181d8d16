//! Editing a parsed script and writing it back

use crate::common::load_fixture;
use chatmd_babel::{
    generate, parse, try_parse, BlockEdit, BlockList, Choice, EditError, NewBlockDefaults,
};

#[test]
fn test_add_block_is_serialized_with_defaults() {
    let mut blocks = try_parse("# Bot\nSalut").unwrap();
    let index = blocks.add_block("Nouveau", &NewBlockDefaults::default()).unwrap();
    assert_eq!(index, 1);

    assert_eq!(
        generate(blocks.as_slice()),
        "# Bot\nSalut\n\n## Nouveau\n- déclencheur\nContenu du bloc"
    );
}

#[test]
fn test_move_then_generate_keeps_order() {
    let mut blocks = try_parse(&load_fixture("kitchensink.md")).unwrap();
    blocks.move_block(4, 1).unwrap();

    let reparsed = parse(&generate(blocks.as_slice()));
    let titles: Vec<&str> = reparsed.iter().map(|block| block.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Assistant de révision",
            "Mauvaise réponse",
            "Révision",
            "Quiz",
            "Bonne réponse"
        ]
    );
}

#[test]
fn test_welcome_cannot_move_or_be_deleted() {
    let mut blocks = try_parse(&load_fixture("kitchensink.md")).unwrap();
    assert_eq!(blocks.move_block(0, 2), Err(EditError::WelcomeLocked));
    assert_eq!(blocks.move_block(3, 0), Err(EditError::WelcomeLocked));
    assert!(matches!(
        blocks.delete_block(0),
        Err(EditError::WelcomeLocked)
    ));
    assert_eq!(blocks.len(), 5);
}

#[test]
fn test_delete_leaves_dangling_choices() {
    let mut blocks = try_parse(&load_fixture("kitchensink.md")).unwrap();
    let (index, _) = blocks.find_by_title("Quiz").unwrap();
    let removed = blocks.delete_block(index).unwrap();
    assert_eq!(removed.title(), "Quiz");

    let text = generate(blocks.as_slice());
    assert!(!text.contains("## Quiz"));
    assert!(text.contains("1. [Réessayer](Quiz)"));
}

#[test]
fn test_update_from_form_fields() {
    let mut blocks = try_parse("# Bot\nSalut\n\n## Aide\n- aide\nTexte").unwrap();
    blocks
        .update_block(
            1,
            BlockEdit {
                title: " Support ".to_string(),
                triggers: BlockEdit::triggers_from_lines("support\n\n  assistance "),
                content: "Écrivez-nous.\n1. [Vieux](Choix)".to_string(),
                choices: vec![Choice::new("Retour", "Bot"), Choice::new("", "Nulle part")],
            },
        )
        .unwrap();

    assert_eq!(
        generate(blocks.as_slice()),
        "# Bot\nSalut\n\n## Support\n- support\n- assistance\nÉcrivez-nous.\n1. [Retour](Bot)\n"
    );
}

#[test]
fn test_update_welcome_keeps_header() {
    let mut blocks = try_parse("---\nstyle: a\n---\n# Bot\nSalut").unwrap();
    blocks
        .update_block(
            0,
            BlockEdit {
                title: "Robot".to_string(),
                triggers: vec!["ignoré".to_string()],
                content: "Bonjour".to_string(),
                choices: vec![],
            },
        )
        .unwrap();

    assert_eq!(generate(blocks.as_slice()), "---\nstyle: a\n---\n\n# Robot\nBonjour");
}

#[test]
fn test_edit_errors() {
    let mut blocks = BlockList::new(Default::default());
    assert_eq!(
        blocks.add_block("   ", &NewBlockDefaults::default()),
        Err(EditError::EmptyTitle)
    );
    assert_eq!(
        blocks.update_block(3, BlockEdit::default()),
        Err(EditError::IndexOutOfRange { index: 3, len: 1 })
    );
    assert_eq!(
        blocks.update_block(0, BlockEdit::default()),
        Err(EditError::EmptyTitle)
    );
}
