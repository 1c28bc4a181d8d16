//! ChatMD serialization (blocks → text)
//!
//! Output layout:
//!
//!     ---
//!     <yaml>            (only when the welcome block carries a header)
//!     ---
//!
//!     # <welcome title>
//!     <welcome content>
//!     1. [<text>](<target>)
//!
//!
//!     ## <response title>
//!     - <trigger>
//!     <content>
//!     1. [<text>](<target>)
//!
//! Choices with a blank label or target are not written, so they disappear on the next
//! parse. Numbering counts written choices only.

use super::extract::strip_choice_lines;
use crate::block::{Block, Choice};
use crate::error::FormatError;

/// Render a block list as ChatMD text.
///
/// Index 0 must be the welcome block.
pub fn serialize_to_chatmd(blocks: &[Block]) -> Result<String, FormatError> {
    let (first, rest) = blocks.split_first().ok_or(FormatError::EmptyInput)?;
    let Block::Welcome(welcome) = first else {
        return Err(FormatError::MissingWelcome);
    };

    let mut output = String::new();

    if !welcome.yaml.is_empty() {
        output.push_str(&format!("---\n{}\n---\n\n", welcome.yaml));
    }

    output.push_str(&format!("# {}\n", welcome.title));
    output.push_str(&strip_choice_lines(&welcome.content));
    push_choices(&mut output, &welcome.choices);

    for (offset, block) in rest.iter().enumerate() {
        output.push_str(&format!("\n\n## {}\n", block.title()));

        match block {
            Block::Response(response) => {
                for trigger in &response.triggers {
                    output.push_str(&format!("- {trigger}\n"));
                }
            }
            Block::Welcome(extra) => {
                if !extra.yaml.is_empty() {
                    log::warn!(
                        "Dropping header of welcome block '{}' found at index {}",
                        extra.title,
                        offset + 1
                    );
                }
            }
        }

        output.push_str(&strip_choice_lines(block.content()));
        push_choices(&mut output, block.choices());
    }

    Ok(output)
}

/// Append the numbered choice list, starting on a fresh line.
fn push_choices(output: &mut String, choices: &[Choice]) {
    let mut written = choices.iter().filter(|choice| choice.is_complete()).peekable();
    if written.peek().is_none() {
        return;
    }

    if !output.ends_with('\n') {
        output.push('\n');
    }
    for (index, choice) in written.enumerate() {
        output.push_str(&format!(
            "{}. [{}]({})\n",
            index + 1,
            choice.text,
            choice.target
        ));
    }
}
