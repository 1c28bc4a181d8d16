//! Section splitting
//!
//!     Response sections are found by splitting the body on the raw `"## "` substring,
//!     not by recognizing headings at line starts. Any `"## "` inside content (quoted
//!     Markdown, code blocks) therefore opens a spurious section. This is a known
//!     limitation of the dialect; keeping the split behind [`split_sections`] lets a
//!     heading-aware scanner replace it without touching the parser.

/// Delimiter that opens a response section.
pub const SECTION_DELIMITER: &str = "## ";

/// One piece of the body that followed a section delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Position of the segment among all segments, starting at 1.
    pub index: usize,
    /// Raw text between this delimiter and the next one.
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    /// Split into the heading line and the remaining body.
    ///
    /// Returns `None` when the segment has no line break, i.e. a heading without body.
    pub fn split_heading(&self) -> Option<(&'a str, &'a str)> {
        let newline = self.text.find('\n')?;
        Some((&self.text[..newline], &self.text[newline + 1..]))
    }
}

/// Segments following each `"## "` occurrence; the text before the first one is dropped.
pub fn split_sections(body: &str) -> Vec<Segment<'_>> {
    body.split(SECTION_DELIMITER)
        .enumerate()
        .skip(1)
        .map(|(index, text)| Segment { index, text })
        .collect()
}

/// Byte offset of the first line, at or after `from`, that starts with `marker`.
///
/// `from` must lie on a char boundary.
pub fn find_line_starting_with(text: &str, marker: &str, from: usize) -> Option<usize> {
    let mut start = from;
    loop {
        let rest = &text[start..];
        if rest.starts_with(marker) && (start == 0 || text[..start].ends_with('\n')) {
            return Some(start);
        }
        start += rest.find('\n')? + 1;
    }
}
