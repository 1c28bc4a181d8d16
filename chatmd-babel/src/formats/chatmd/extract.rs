//! Trigger, content and choice extraction for a block body
//!
//!     A response body looks like:
//!
//!         - bonjour
//!         - salut
//!         Free text shown to the user.
//!         1. [Continue](Next block)
//!
//!     Triggers are only the leading run of `- ` lines. Scanning is a two-state machine
//!     (ScanningTriggers → ScanningContent) with no way back, so a `- ` line that comes
//!     after content is plain content. Choice lines are recognized anywhere in the body,
//!     pulled out into [`Choice`] records and removed from the content.

use crate::block::Choice;
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix that marks a trigger line.
pub const TRIGGER_MARKER: &str = "- ";

static CHOICE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.\s*\[.*?\]\(.*?\)").unwrap());

static CHOICE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningTriggers,
    ScanningContent,
}

/// A body split into its leading trigger lines and the remaining content lines.
struct BodyScan<'a> {
    triggers: Vec<&'a str>,
    content: Vec<&'a str>,
}

fn scan_body(body: &str) -> BodyScan<'_> {
    let mut state = ScanState::ScanningTriggers;
    let mut scan = BodyScan {
        triggers: Vec::new(),
        content: Vec::new(),
    };

    for line in body.split('\n') {
        if state == ScanState::ScanningTriggers {
            match line.strip_prefix(TRIGGER_MARKER) {
                Some(trigger) => {
                    scan.triggers.push(trigger);
                    continue;
                }
                None => state = ScanState::ScanningContent,
            }
        }
        scan.content.push(line);
    }

    scan
}

/// Whether a line is a numbered choice (`1. [text](target)`).
pub fn is_choice_line(line: &str) -> bool {
    CHOICE_LINE.is_match(line)
}

/// Leading run of trigger lines, marker removed and trimmed.
pub fn extract_triggers(body: &str) -> Vec<String> {
    scan_body(body)
        .triggers
        .into_iter()
        .map(|trigger| trigger.trim().to_string())
        .collect()
}

/// Body text after the trigger run, without choice lines, trimmed.
pub fn extract_content(body: &str) -> String {
    let scan = scan_body(body);
    let kept: Vec<&str> = scan
        .content
        .into_iter()
        .filter(|line| !is_choice_line(line))
        .collect();
    kept.join("\n").trim().to_string()
}

/// Every numbered choice in the body, in line order.
///
/// The numeral is cosmetic: `3.` before `1.` keeps line order.
pub fn extract_choices(body: &str) -> Vec<Choice> {
    body.split('\n')
        .filter(|line| is_choice_line(line))
        .filter_map(|line| {
            let captures = CHOICE_LINK.captures(line)?;
            Some(Choice::new(&captures[1], &captures[2]))
        })
        .collect()
}

/// Drop choice lines and keep everything else as-is.
pub fn strip_choice_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !is_choice_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
