//! JSON format implementation
//!
//! The block list as hosts exchange it: an array of internally tagged records.
//!
//! ```text
//! [
//!   { "type": "welcome", "id": "mon-chatbot", "title": "Mon Chatbot",
//!     "content": "...", "choices": [{"text": "Aide", "target": "Aide"}], "yaml": "" },
//!   { "type": "response", "id": "aide", "title": "Aide", "triggers": ["help"],
//!     "content": "...", "choices": [] }
//! ]
//! ```
//!
//! `id` is written for the benefit of hosts and ignored on input, since it always
//! follows the title. Parsing checks the welcome-first invariant.

use crate::block::Block;
use crate::editing::BlockList;
use crate::error::FormatError;
use crate::format::{bool_option, reject_unknown_options, Format};
use serde_json::Value;
use std::collections::HashMap;

/// Format implementation for JSON block lists
#[derive(Debug, Clone)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        JsonFormat { pretty }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        JsonFormat { pretty: true }
    }
}

/// Serde value of a block with its derived `id` added.
fn block_record(block: &Block) -> Result<Value, FormatError> {
    let mut value = serde_json::to_value(block)
        .map_err(|e| FormatError::SerializationError(format!("JSON conversion failed: {e}")))?;
    if let Value::Object(map) = &mut value {
        map.insert("id".to_string(), Value::String(block.id()));
    }
    Ok(value)
}

/// Render blocks as a JSON array.
pub fn serialize_to_json(blocks: &[Block], pretty: bool) -> Result<String, FormatError> {
    let records = blocks
        .iter()
        .map(block_record)
        .collect::<Result<Vec<_>, _>>()?;
    let array = Value::Array(records);

    let rendered = if pretty {
        serde_json::to_string_pretty(&array)
    } else {
        serde_json::to_string(&array)
    };
    rendered.map_err(|e| FormatError::SerializationError(format!("JSON output failed: {e}")))
}

/// Read a JSON array of block records.
pub fn parse_from_json(source: &str) -> Result<BlockList, FormatError> {
    let blocks: Vec<Block> = serde_json::from_str(source)
        .map_err(|e| FormatError::ParseError(format!("Invalid block JSON: {e}")))?;
    BlockList::from_blocks(blocks)
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Block list as a JSON array"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<BlockList, FormatError> {
        parse_from_json(source)
    }

    fn serialize(&self, blocks: &BlockList) -> Result<String, FormatError> {
        serialize_to_json(blocks.as_slice(), self.pretty)
    }

    fn serialize_with_options(
        &self,
        blocks: &BlockList,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown_options(self.name(), options, &["pretty"])?;
        let pretty = bool_option(options, "pretty")?.unwrap_or(self.pretty);
        serialize_to_json(blocks.as_slice(), pretty)
    }
}
