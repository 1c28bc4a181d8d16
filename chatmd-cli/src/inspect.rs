//! Inspect views
//!
//! Each view renders a parsed script for a human (or a script) to look at:
//!
//! - `treeviz`:  outline of blocks, triggers and choices (default)
//! - `json`:     the block list as JSON records
//! - `links`:    every choice as an edge, with the welcome block's entry targets
//! - `dangling`: only the choices whose target matches no block title
//!
//! Views accept extra parameters via `--extra-<name> [value]`; `treeviz` takes
//! `max-width` and `json` takes `pretty`.

use chatmd_babel::links::{dangling_links, entry_targets, links, Link};
use chatmd_babel::{BlockList, FormatRegistry};
use std::collections::HashMap;

/// All available inspect views
pub const AVAILABLE_VIEWS: &[&str] = &["treeviz", "json", "links", "dangling"];

pub const DEFAULT_VIEW: &str = "treeviz";

/// Render `blocks` with the named view.
pub fn execute_view(
    registry: &FormatRegistry,
    blocks: &BlockList,
    view: &str,
    params: &HashMap<String, String>,
) -> Result<String, String> {
    match view {
        "treeviz" | "json" => registry
            .serialize_with_options(blocks, view, params)
            .map_err(|e| e.to_string()),
        "links" => Ok(render_links(blocks)),
        "dangling" => Ok(render_dangling(blocks)),
        other => Err(format!(
            "Unknown view '{other}'. Available views: {}",
            AVAILABLE_VIEWS.join(", ")
        )),
    }
}

fn link_line(link: &Link<'_>) -> String {
    let marker = if link.resolved { "" } else { " (missing)" };
    format!(
        "{} → {} [{}]{marker}\n",
        link.source, link.target, link.text
    )
}

fn render_links(blocks: &BlockList) -> String {
    let blocks = blocks.as_slice();
    let entries = entry_targets(blocks);

    let mut output = if entries.is_empty() {
        "Entry: (none)\n".to_string()
    } else {
        format!("Entry: {}\n", entries.join(", "))
    };
    for link in links(blocks) {
        output.push_str(&link_line(&link));
    }
    output
}

fn render_dangling(blocks: &BlockList) -> String {
    let dangling = dangling_links(blocks.as_slice());
    if dangling.is_empty() {
        return "No dangling links\n".to_string();
    }
    dangling.iter().map(link_line).collect()
}
