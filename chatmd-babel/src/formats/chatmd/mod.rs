//! ChatMD format implementation
//!
//! ChatMD is a small Markdown dialect for chatbot scripts:
//!
//! | Element        | Syntax                       | Block field                          |
//! |----------------|------------------------------|--------------------------------------|
//! | Header         | `---` ... `---` (first line) | `yaml` of the welcome block, raw     |
//! | Welcome        | `# <title>`                  | welcome `title`                      |
//! | Response       | `## <title>`                 | response `title`                     |
//! | Trigger        | `- <text>` (leading run)     | response `triggers`                  |
//! | Choice         | `<n>. [<text>](<target>)`    | `choices`, removed from `content`    |
//! | Anything else  | free text                    | `content`                            |
//!
//! # Round-trip boundary
//!
//! `parse(serialize(blocks)) == blocks` holds when:
//! - every choice has a non-blank label and target,
//! - no content contains the `"## "` substring (see [`sections`]),
//! - content is trimmed and, for a response without triggers, does not open with a
//!   `- ` line (it would be read back as a trigger).
//!
//! Block ids are not stored and are recomputed from titles.

pub mod extract;
pub mod parser;
pub mod sections;
pub mod serializer;

use crate::editing::BlockList;
use crate::error::FormatError;
use crate::format::Format;

pub use parser::{Diagnostic, ParseOptions, ParsedScript, DEFAULT_TITLE};

/// Format implementation for ChatMD
#[derive(Debug, Clone, Default)]
pub struct ChatMdFormat {
    options: ParseOptions,
}

impl ChatMdFormat {
    pub fn new(options: ParseOptions) -> Self {
        ChatMdFormat { options }
    }

    /// Parse and keep the recovered diagnostics.
    pub fn parse_with_diagnostics(&self, source: &str) -> ParsedScript {
        parser::parse_with_options(source, &self.options)
    }
}

impl Format for ChatMdFormat {
    fn name(&self) -> &str {
        "chatmd"
    }

    fn description(&self) -> &str {
        "ChatMD chatbot script (Markdown dialect)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["chatmd", "md"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<BlockList, FormatError> {
        Ok(self.parse_with_diagnostics(source).blocks)
    }

    fn serialize(&self, blocks: &BlockList) -> Result<String, FormatError> {
        serializer::serialize_to_chatmd(blocks.as_slice())
    }
}
