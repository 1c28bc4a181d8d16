//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing text into a [`BlockList`] and
//! serializing a [`BlockList`] back to text.

use crate::editing::BlockList;
use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for script formats
///
/// Implementors provide conversion between a string representation and a block list.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, blocks: &BlockList) -> Result<String, FormatError> {
///         Ok(blocks.iter().map(|b| b.title()).collect::<Vec<_>>().join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "chatmd", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → blocks)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (blocks → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a block list
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<BlockList, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a block list into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _blocks: &BlockList) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a block list, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which delegates
    /// to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        blocks: &BlockList,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(blocks)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Read a boolean format option ("true"/"false", "1"/"0", "yes"/"no").
pub(crate) fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
) -> Result<Option<bool>, FormatError> {
    let Some(raw) = options.get(key) else {
        return Ok(None);
    };
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean '{other}' for option '{key}'"
        ))),
    }
}

/// Read a numeric format option.
pub(crate) fn usize_option(
    options: &HashMap<String, String>,
    key: &str,
) -> Result<Option<usize>, FormatError> {
    options
        .get(key)
        .map(|raw| {
            raw.parse::<usize>().map_err(|e| {
                FormatError::SerializationError(format!("Invalid number '{raw}' for '{key}': {e}"))
            })
        })
        .transpose()
}

/// Reject options a format does not know about.
pub(crate) fn reject_unknown_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(FormatError::NotSupported(format!(
        "Format '{format}' does not support parameters: {}",
        unknown.join(", ")
    )))
}
