//! Treeviz formatter for block lists
//!
//! A visual outline of a script, one line per node:
//! <prefix><connector> <icon> <label> (labels truncated to `max_width` characters)
//!
//! Example:
//!
//!   ⧉ 2 blocks
//!   ├─ ⌂ Mon Bot
//!   │ ├─ ≡ header (1 line)
//!   │ ├─ ¶ Bienvenue !
//!   │ └─ → Aide ⇒ Aide
//!   └─ § Aide
//!     ├─ ⚑ help
//!     ├─ ¶ Voici de l'aide
//!     └─ → Retour ⇒ Accueil (missing)
//!
//! Icons
//!     Document: ⧉
//!     Welcome: ⌂
//!     Response: §
//!     Header: ≡
//!     Trigger: ⚑
//!     Content: ¶
//!     Choice: →

use crate::block::Block;
use crate::editing::BlockList;
use crate::error::FormatError;
use crate::format::{reject_unknown_options, usize_option, Format};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_MAX_WIDTH: usize = 30;

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Welcome" => "⌂",
        "Response" => "§",
        "Header" => "≡",
        "Trigger" => "⚑",
        "Content" => "¶",
        "Choice" => "→",
        _ => "○",
    }
}

fn truncate(label: &str, max_width: usize) -> String {
    if label.chars().count() <= max_width {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(max_width).collect();
        short.push('…');
        short
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Leaf lines under a block, as (icon name, label).
fn block_children(
    block: &Block,
    titles: &HashSet<&str>,
    max_width: usize,
) -> Vec<(&'static str, String)> {
    let mut children = Vec::new();

    if let Some(yaml) = block.yaml().filter(|yaml| !yaml.is_empty()) {
        let lines = plural(yaml.lines().count(), "line");
        children.push(("Header", format!("header ({lines})")));
    }
    for trigger in block.triggers() {
        children.push(("Trigger", truncate(trigger, max_width)));
    }
    if let Some(first_line) = block.content().lines().find(|line| !line.trim().is_empty()) {
        children.push(("Content", truncate(first_line.trim(), max_width)));
    }
    for choice in block.choices() {
        let missing = if titles.contains(choice.target.as_str()) {
            ""
        } else {
            " (missing)"
        };
        children.push((
            "Choice",
            format!(
                "{} ⇒ {}{missing}",
                truncate(&choice.text, max_width),
                truncate(&choice.target, max_width)
            ),
        ));
    }

    children
}

/// Render the outline of a block list.
pub fn to_treeviz_str(blocks: &[Block], max_width: usize) -> String {
    let titles: HashSet<&str> = blocks.iter().map(Block::title).collect();
    let mut output = format!("{} {}\n", get_icon("Document"), plural(blocks.len(), "block"));

    for (index, block) in blocks.iter().enumerate() {
        let is_last = index == blocks.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        let icon = match block {
            Block::Welcome(_) => get_icon("Welcome"),
            Block::Response(_) => get_icon("Response"),
        };
        output.push_str(&format!(
            "{connector} {icon} {}\n",
            truncate(block.title(), max_width)
        ));

        let child_prefix = if is_last { "  " } else { "│ " };
        let children = block_children(block, &titles, max_width);
        for (child_index, (node_type, label)) in children.iter().enumerate() {
            let connector = if child_index == children.len() - 1 {
                "└─"
            } else {
                "├─"
            };
            output.push_str(&format!(
                "{child_prefix}{connector} {} {label}\n",
                get_icon(node_type)
            ));
        }
    }

    output
}

/// Format implementation for the treeviz outline (serialization only)
#[derive(Debug, Clone)]
pub struct TreevizFormat {
    max_width: usize,
}

impl TreevizFormat {
    pub fn new(max_width: usize) -> Self {
        TreevizFormat { max_width }
    }
}

impl Default for TreevizFormat {
    fn default() -> Self {
        TreevizFormat {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree outline of the blocks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, blocks: &BlockList) -> Result<String, FormatError> {
        Ok(to_treeviz_str(blocks.as_slice(), self.max_width))
    }

    fn serialize_with_options(
        &self,
        blocks: &BlockList,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown_options(self.name(), options, &["max-width"])?;
        let max_width = usize_option(options, "max-width")?.unwrap_or(self.max_width);
        Ok(to_treeviz_str(blocks.as_slice(), max_width))
    }
}
