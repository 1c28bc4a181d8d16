//! Block-list editing
//!
//!     [`BlockList`] is the structure hosts hold between a parse and the next serialize.
//!     It keeps the welcome block pinned at index 0: the welcome block can be edited in
//!     place but never moved, deleted or displaced by another block.
//!
//!     Edits follow the block editor's rules: titles are required, blank triggers and
//!     half-filled choices are dropped, and choice lines typed into the content are
//!     removed because choices live in their own field.

use crate::block::{Block, Choice, ResponseBlock, WelcomeBlock};
use crate::error::{EditError, FormatError};
use crate::formats::chatmd::extract::strip_choice_lines;

/// Trigger and content given to freshly added blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlockDefaults {
    pub trigger: String,
    pub content: String,
}

impl Default for NewBlockDefaults {
    fn default() -> Self {
        NewBlockDefaults {
            trigger: "déclencheur".to_string(),
            content: "Contenu du bloc".to_string(),
        }
    }
}

/// Replacement values for one block, as submitted by an edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockEdit {
    pub title: String,
    /// Ignored for the welcome block.
    pub triggers: Vec<String>,
    pub content: String,
    pub choices: Vec<Choice>,
}

impl BlockEdit {
    /// Triggers from a multi-line text field, one per line.
    pub fn triggers_from_lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }
}

/// Ordered blocks with the welcome block at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new(welcome: WelcomeBlock) -> Self {
        BlockList {
            blocks: vec![Block::Welcome(welcome)],
        }
    }

    /// Check the welcome invariant on a plain list.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, FormatError> {
        match blocks.first() {
            None => return Err(FormatError::EmptyInput),
            Some(Block::Response(_)) => return Err(FormatError::MissingWelcome),
            Some(Block::Welcome(_)) => {}
        }
        if let Some(index) = blocks.iter().skip(1).position(Block::is_welcome) {
            return Err(FormatError::DuplicateWelcome(index + 1));
        }
        Ok(BlockList { blocks })
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_vec(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Never true; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn welcome(&self) -> &WelcomeBlock {
        match self.blocks.first() {
            Some(Block::Welcome(welcome)) => welcome,
            _ => unreachable!("BlockList always starts with the welcome block"),
        }
    }

    pub fn welcome_mut(&mut self) -> &mut WelcomeBlock {
        match self.blocks.first_mut() {
            Some(Block::Welcome(welcome)) => welcome,
            _ => unreachable!("BlockList always starts with the welcome block"),
        }
    }

    pub fn responses(&self) -> impl Iterator<Item = &ResponseBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Response(response) => Some(response),
            Block::Welcome(_) => None,
        })
    }

    /// First block carrying this exact title, with its index.
    pub fn find_by_title(&self, title: &str) -> Option<(usize, &Block)> {
        self.blocks
            .iter()
            .enumerate()
            .find(|(_, block)| block.title() == title)
    }

    pub fn push_response(&mut self, block: ResponseBlock) {
        self.blocks.push(Block::Response(block));
    }

    /// Append a response titled `title` seeded with the defaults. Returns its index.
    pub fn add_block(
        &mut self,
        title: &str,
        defaults: &NewBlockDefaults,
    ) -> Result<usize, EditError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(EditError::EmptyTitle);
        }

        self.push_response(ResponseBlock {
            title: title.to_string(),
            triggers: vec![defaults.trigger.clone()],
            content: defaults.content.clone(),
            choices: Vec::new(),
        });
        log::debug!("Added block '{title}'");
        Ok(self.blocks.len() - 1)
    }

    /// Move the block at `from` so that it ends up at `to`.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        if from == 0 || to == 0 {
            return Err(EditError::WelcomeLocked);
        }
        self.check_index(from)?;
        self.check_index(to)?;

        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        Ok(())
    }

    /// Remove and return the block at `index`.
    pub fn delete_block(&mut self, index: usize) -> Result<Block, EditError> {
        if index == 0 {
            return Err(EditError::WelcomeLocked);
        }
        self.check_index(index)?;
        Ok(self.blocks.remove(index))
    }

    /// Replace the editable fields of the block at `index`.
    pub fn update_block(&mut self, index: usize, edit: BlockEdit) -> Result<(), EditError> {
        self.check_index(index)?;

        let title = edit.title.trim();
        if title.is_empty() {
            return Err(EditError::EmptyTitle);
        }

        let content = strip_choice_lines(edit.content.trim()).trim().to_string();
        let choices: Vec<Choice> = edit
            .choices
            .iter()
            .filter(|choice| choice.is_complete())
            .map(|choice| Choice::new(choice.text.trim(), choice.target.trim()))
            .collect();

        match &mut self.blocks[index] {
            Block::Welcome(welcome) => {
                welcome.title = title.to_string();
                welcome.content = content;
                welcome.choices = choices;
            }
            Block::Response(response) => {
                response.title = title.to_string();
                response.triggers = edit
                    .triggers
                    .iter()
                    .map(|trigger| trigger.trim())
                    .filter(|trigger| !trigger.is_empty())
                    .map(str::to_string)
                    .collect();
                response.content = content;
                response.choices = choices;
            }
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfRange {
                index,
                len: self.blocks.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl TryFrom<Vec<Block>> for BlockList {
    type Error = FormatError;

    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        BlockList::from_blocks(blocks)
    }
}
