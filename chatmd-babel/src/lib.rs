//! Conversion between ChatMD scripts and dialogue blocks
//!
//!     A chatbot script can be edited as ChatMD text (a constrained Markdown dialect) or as
//!     an ordered list of dialogue blocks. This crate keeps the two views in sync: it parses
//!     text into blocks and regenerates text from blocks, losslessly for everything the
//!     block model captures.
//!
//!     This is a pure lib: no code here assumes a shell, prints, or reads the environment.
//!     Diagnostics go through the `log` facade; installing a logger is the host's job.
//!
//!     The file structure :
//!     .
//!     ├── block.rs                # Block model (welcome / response variants)
//!     ├── editing.rs              # BlockList and the add / move / delete / update operations
//!     ├── links.rs                # Choice graph: links, dangling targets
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── chatmd
//!     │   │   ├── parser.rs       # text → blocks
//!     │   │   ├── serializer.rs   # blocks → text
//!     │   │   ├── extract.rs      # triggers / content / choices helpers
//!     │   │   └── sections.rs     # `## ` section splitting
//!     │   ├── json                # block list as JSON records
//!     │   └── treeviz             # outline view (output only)
//!     └── lib.rs
//!
//! Entry points
//!
//!     [`parse`] and [`generate`] are fail-soft: they never return an error, they log it and
//!     fall back to an empty list / empty string so an editor never crashes on bad input.
//!     [`try_parse`] and [`try_generate`] expose the same operations with explicit errors.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common               # shared fixtures loader
//!     ├── chatmd               # parsing, serialization, round-trip properties
//!     ├── json
//!     └── fixtures
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs mounts them.

pub mod block;
pub mod editing;
pub mod error;
pub mod format;
pub mod formats;
pub mod links;
pub mod registry;

pub use block::{Block, BlockKind, Choice, ResponseBlock, WelcomeBlock};
pub use editing::{BlockEdit, BlockList, NewBlockDefaults};
pub use error::{EditError, FormatError};
pub use format::Format;
pub use formats::chatmd::{Diagnostic, ParseOptions, ParsedScript};
pub use registry::FormatRegistry;

use formats::chatmd::{parser, serializer};

/// Parse ChatMD text, reporting failures as errors.
pub fn try_parse(text: &str) -> Result<BlockList, FormatError> {
    formats::ChatMdFormat::default().parse(text)
}

/// Parse ChatMD text into blocks.
///
/// Never fails: on error the cause is logged and an empty list is returned, which hosts
/// treat as "nothing to show".
pub fn parse(text: &str) -> Vec<Block> {
    match try_parse(text) {
        Ok(blocks) => blocks.into_vec(),
        Err(err) => {
            log::error!("Failed to parse ChatMD: {err}");
            Vec::new()
        }
    }
}

/// Parse ChatMD text with explicit options, keeping the diagnostics.
pub fn parse_with_diagnostics(text: &str, options: &ParseOptions) -> ParsedScript {
    parser::parse_with_options(text, options)
}

/// Generate ChatMD text from blocks, reporting failures as errors.
pub fn try_generate(blocks: &[Block]) -> Result<String, FormatError> {
    serializer::serialize_to_chatmd(blocks)
}

/// Generate ChatMD text from blocks.
///
/// Returns an empty string (and logs) when `blocks` is empty or does not start with the
/// welcome block.
pub fn generate(blocks: &[Block]) -> String {
    match try_generate(blocks) {
        Ok(text) => text,
        Err(err) => {
            log::error!("Failed to generate ChatMD: {err}");
            String::new()
        }
    }
}
