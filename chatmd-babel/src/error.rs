//! Error types for format and block-list operations

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested direction
    NotSupported(String),
    /// Serialization was asked to render an empty block list
    EmptyInput,
    /// The block at index 0 is not the welcome block
    MissingWelcome,
    /// A second welcome block was found at the given index
    DuplicateWelcome(usize),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::EmptyInput => write!(f, "No blocks to convert"),
            FormatError::MissingWelcome => write!(f, "The first block must be the welcome block"),
            FormatError::DuplicateWelcome(index) => {
                write!(f, "Unexpected second welcome block at index {index}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors raised by the block-list editing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The welcome block cannot be moved, replaced or deleted
    WelcomeLocked,
    /// Index outside of the block list
    IndexOutOfRange { index: usize, len: usize },
    /// Blocks need a non-blank title
    EmptyTitle,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::WelcomeLocked => write!(f, "The welcome block cannot be moved or deleted"),
            EditError::IndexOutOfRange { index, len } => {
                write!(f, "Block index {index} out of range (list has {len} blocks)")
            }
            EditError::EmptyTitle => write!(f, "A block title is required"),
        }
    }
}

impl std::error::Error for EditError {}
