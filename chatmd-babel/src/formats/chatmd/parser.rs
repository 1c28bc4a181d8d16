//! ChatMD parsing (text → blocks)
//!
//! Pipeline: front matter split → welcome block → `## ` sections → per-section extraction.
//! Malformed input never fails the parse; recoverable oddities are reported as
//! [`Diagnostic`]s and logged.

use super::extract::{extract_choices, extract_content, extract_triggers, strip_choice_lines};
use super::sections::{find_line_starting_with, split_sections, SECTION_DELIMITER};
use crate::block::{ResponseBlock, WelcomeBlock};
use crate::editing::BlockList;
use std::fmt;

/// Title used when the document has no `# ` line.
pub const DEFAULT_TITLE: &str = "Mon Chatbot";

const HEADER_MARKER: &str = "---";
const WELCOME_MARKER: &str = "# ";

/// Knobs for the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub default_title: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Something the parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The text opens a `---` header that is never closed; it was read as body.
    HeaderMalformed,
    /// A `## ` segment had no line break after its heading and was skipped.
    SectionEmpty { index: usize, heading: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::HeaderMalformed => {
                write!(f, "Unterminated '---' header, treating the whole text as body")
            }
            Diagnostic::SectionEmpty { index, heading } => {
                write!(f, "Section {index} ('{heading}') has no body and was skipped")
            }
        }
    }
}

/// Parse result together with what was recovered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedScript {
    pub blocks: BlockList,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse ChatMD text with default options.
pub fn parse_from_chatmd(source: &str) -> ParsedScript {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse ChatMD text into a block list. Always yields at least the welcome block.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> ParsedScript {
    let mut diagnostics = Vec::new();

    let (yaml, body) = split_header(source, &mut diagnostics);
    let welcome = parse_welcome(body, yaml, options);
    log::debug!(
        "Parsed welcome block '{}' ({} choices)",
        welcome.title,
        welcome.choices.len()
    );

    let mut blocks = BlockList::new(welcome);
    for block in parse_responses(body, &mut diagnostics) {
        blocks.push_response(block);
    }

    ParsedScript {
        blocks,
        diagnostics,
    }
}

/// Returns `(yaml, body)`. Without a well-formed header the whole text is body.
fn split_header<'a>(source: &'a str, diagnostics: &mut Vec<Diagnostic>) -> (&'a str, &'a str) {
    let first_line = source.split('\n').next().unwrap_or_default();
    if first_line.trim_end_matches('\r') != HEADER_MARKER {
        return ("", source);
    }

    let after_open = &source[HEADER_MARKER.len()..];
    match after_open.find(HEADER_MARKER) {
        Some(close) => {
            let yaml = after_open[..close].trim();
            // Trailing whitespace is kept so a final `## Title\n` section still has a body line.
            let body = after_open[close + HEADER_MARKER.len()..].trim_start();
            (yaml, body)
        }
        None => {
            log::warn!("{}", Diagnostic::HeaderMalformed);
            diagnostics.push(Diagnostic::HeaderMalformed);
            ("", source)
        }
    }
}

fn parse_welcome(body: &str, yaml: &str, options: &ParseOptions) -> WelcomeBlock {
    let mut welcome = WelcomeBlock {
        title: options.default_title.clone(),
        yaml: yaml.to_string(),
        ..Default::default()
    };

    let Some(title_start) = find_line_starting_with(body, WELCOME_MARKER, 0) else {
        return welcome;
    };

    let after_marker = &body[title_start + WELCOME_MARKER.len()..];
    let Some(title_end) = after_marker.find('\n') else {
        welcome.title = after_marker.trim().to_string();
        return welcome;
    };
    welcome.title = after_marker[..title_end].trim().to_string();

    let content_start = title_start + WELCOME_MARKER.len() + title_end + 1;
    let content_end =
        find_line_starting_with(body, SECTION_DELIMITER, content_start).unwrap_or(body.len());
    let raw = body[content_start..content_end].trim();

    welcome.content = strip_choice_lines(raw).trim().to_string();
    welcome.choices = extract_choices(raw);
    welcome
}

fn parse_responses(body: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<ResponseBlock> {
    let mut responses = Vec::new();

    for segment in split_sections(body) {
        let Some((heading, rest)) = segment.split_heading() else {
            let diagnostic = Diagnostic::SectionEmpty {
                index: segment.index,
                heading: segment.text.trim().to_string(),
            };
            log::debug!("{diagnostic}");
            diagnostics.push(diagnostic);
            continue;
        };

        let raw = rest.trim();
        responses.push(ResponseBlock {
            title: heading.trim().to_string(),
            triggers: extract_triggers(raw),
            content: extract_content(raw),
            choices: extract_choices(raw),
        });
    }

    responses
}
