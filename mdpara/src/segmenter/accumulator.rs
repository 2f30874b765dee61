//! The paragraph currently being built

use crate::paragraph::{Paragraph, ParagraphType};

/// In-progress paragraph state: type, text buffer and pending metadata
#[derive(Debug)]
pub struct Accumulator {
    kind: ParagraphType,
    content: String,
    metadata: String,
}

impl Accumulator {
    /// Create an empty accumulator in the text state
    pub fn new() -> Self {
        Self {
            kind: ParagraphType::Text,
            content: String::new(),
            metadata: String::new(),
        }
    }

    /// Whether a code block is open
    pub fn in_code(&self) -> bool {
        self.kind == ParagraphType::Code
    }

    /// Language tag recorded by the opening fence
    pub fn language(&self) -> &str {
        &self.metadata
    }

    /// Number of buffered lines
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Replace the whole state with a single-line paragraph of the given type
    pub fn set_line(&mut self, kind: ParagraphType, text: &str) {
        self.kind = kind;
        self.content.clear();
        self.content.push_str(text);
        self.metadata.clear();
    }

    /// Enter the code state with the fence's language tag and an empty body
    pub fn open_code(&mut self, language: &str) {
        self.kind = ParagraphType::Code;
        self.content.clear();
        self.metadata.clear();
        self.metadata.push_str(language);
    }

    /// Append one line of a code block body
    pub fn push_code_line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');
    }

    /// Return to the text state with an empty buffer
    pub fn reset(&mut self) {
        self.kind = ParagraphType::Text;
        self.content.clear();
        self.metadata.clear();
    }

    /// Finalize the buffer into a paragraph
    ///
    /// The buffer is cleared either way; type and metadata are left for the
    /// caller to reset.
    ///
    /// # Returns
    /// * `Some(Paragraph)` - The buffer held non-whitespace content
    /// * `None` - The buffer was empty after trimming
    pub fn flush(&mut self) -> Option<Paragraph> {
        let content = self.content.trim();
        let paragraph = (!content.is_empty()).then(|| Paragraph {
            kind: self.kind,
            content: content.to_string(),
            metadata: self.metadata.clone(),
        });
        self.content.clear();
        paragraph
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
