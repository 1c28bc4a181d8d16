//! Choice graph of a parsed script

use crate::common::load_fixture;
use chatmd_babel::links::{dangling_links, entry_targets, links};
use chatmd_babel::parse;

#[test]
fn test_kitchensink_links() {
    let blocks = parse(&load_fixture("kitchensink.md"));
    let all = links(&blocks);

    assert_eq!(all.len(), 8);
    assert_eq!(all[0].source, "Assistant de révision");
    assert_eq!(all[0].target, "Révision");
    assert!(all[..7].iter().all(|link| link.resolved));
}

#[test]
fn test_kitchensink_dangling_link() {
    let blocks = parse(&load_fixture("kitchensink.md"));
    let dangling = dangling_links(&blocks);

    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].source, "Mauvaise réponse");
    assert_eq!(dangling[0].text, "Aide");
    assert_eq!(dangling[0].target, "Aide inexistante");
    assert!(!dangling[0].resolved);
}

#[test]
fn test_entry_targets() {
    let blocks = parse(&load_fixture("kitchensink.md"));
    assert_eq!(entry_targets(&blocks), vec!["Révision", "Quiz"]);
}

#[test]
fn test_target_matching_is_exact() {
    let blocks = parse("# Bot\n1. [Aide](aide)\n\n## Aide\nTexte");
    assert_eq!(dangling_links(&blocks).len(), 1);
    assert!(entry_targets(&blocks).is_empty());
}
