//! Dialogue block model
//!
//!     A ChatMD script is an ordered list of blocks. The first block is always the welcome
//!     block (the `#` heading of the document); every other block is a response (one `##`
//!     section). Blocks reference each other by title only: a [`Choice`] points at another
//!     block through its `target` title, and nothing checks that the target exists.
//!
//!     Serde uses an internally tagged layout so that a block list serializes as
//!     `[{"type": "welcome", ...}, {"type": "response", ...}]`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Build the DOM-friendly slug for a title: whitespace runs become `-`, then lowercase.
///
/// Slugs are not unique; two blocks with the same title share one.
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN.replace_all(title, "-").to_lowercase()
}

/// An outbound link offered to the user: a button label and the title of the target block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub target: String,
}

impl Choice {
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Choice {
            text: text.into(),
            target: target.into(),
        }
    }

    /// Both halves are non-blank. Incomplete choices are not written out.
    pub fn is_complete(&self) -> bool {
        !self.text.trim().is_empty() && !self.target.trim().is_empty()
    }
}

/// The entry block of a script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeBlock {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Raw front matter, passed through untouched.
    #[serde(default)]
    pub yaml: String,
}

impl WelcomeBlock {
    pub fn new(title: impl Into<String>) -> Self {
        WelcomeBlock {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A dialogue node reached through its triggers or through another block's choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBlock {
    pub title: String,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ResponseBlock {
    pub fn new(title: impl Into<String>) -> Self {
        ResponseBlock {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Variant discriminant, mirrors the serialized `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Welcome,
    Response,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Welcome => "welcome",
            BlockKind::Response => "response",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Welcome(WelcomeBlock),
    Response(ResponseBlock),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Welcome(_) => BlockKind::Welcome,
            Block::Response(_) => BlockKind::Response,
        }
    }

    pub fn is_welcome(&self) -> bool {
        matches!(self, Block::Welcome(_))
    }

    /// Slug of the current title, recomputed on every call.
    pub fn id(&self) -> String {
        slugify(self.title())
    }

    pub fn title(&self) -> &str {
        match self {
            Block::Welcome(b) => &b.title,
            Block::Response(b) => &b.title,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Block::Welcome(b) => &b.content,
            Block::Response(b) => &b.content,
        }
    }

    pub fn choices(&self) -> &[Choice] {
        match self {
            Block::Welcome(b) => &b.choices,
            Block::Response(b) => &b.choices,
        }
    }

    /// Triggers of a response; always empty for the welcome block.
    pub fn triggers(&self) -> &[String] {
        match self {
            Block::Welcome(_) => &[],
            Block::Response(b) => &b.triggers,
        }
    }

    pub fn yaml(&self) -> Option<&str> {
        match self {
            Block::Welcome(b) => Some(&b.yaml),
            Block::Response(_) => None,
        }
    }
}

impl From<WelcomeBlock> for Block {
    fn from(block: WelcomeBlock) -> Self {
        Block::Welcome(block)
    }
}

impl From<ResponseBlock> for Block {
    fn from(block: ResponseBlock) -> Self {
        Block::Response(block)
    }
}
