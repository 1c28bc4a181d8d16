//! Link graph between blocks
//!
//! Choices are the edges of the dialogue graph, addressed by target title. Targets are
//! soft references: a choice may point at a title no block carries.

use crate::block::Block;
use serde::Serialize;
use std::collections::HashSet;

/// One choice seen as an edge of the dialogue graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link<'a> {
    pub source: &'a str,
    pub text: &'a str,
    pub target: &'a str,
    /// Whether some block carries the target title.
    pub resolved: bool,
}

/// Every choice of every block, in block order then choice order.
pub fn links(blocks: &[Block]) -> Vec<Link<'_>> {
    let titles: HashSet<&str> = blocks.iter().map(Block::title).collect();

    blocks
        .iter()
        .flat_map(|block| {
            let titles = &titles;
            block.choices().iter().map(move |choice| Link {
                source: block.title(),
                text: &choice.text,
                target: &choice.target,
                resolved: titles.contains(choice.target.as_str()),
            })
        })
        .collect()
}

/// Links whose target matches no block title.
pub fn dangling_links(blocks: &[Block]) -> Vec<Link<'_>> {
    links(blocks)
        .into_iter()
        .filter(|link| !link.resolved)
        .collect()
}

/// Titles the welcome block leads to directly, skipping unknown targets.
pub fn entry_targets(blocks: &[Block]) -> Vec<&str> {
    let Some(welcome) = blocks.first() else {
        return Vec::new();
    };

    welcome
        .choices()
        .iter()
        .filter_map(|choice| {
            blocks
                .iter()
                .find(|block| block.title() == choice.target)
                .map(Block::title)
        })
        .collect()
}
