//! Line-oriented paragraph segmenter
//!
//! Splits a Markdown document into headers, single text lines and fenced code
//! blocks. Only `#`/`##` headings and backtick fences are recognized; every
//! other construct is carried through as plain text, one paragraph per line.

mod accumulator;
mod line_kind;

use crate::paragraph::{Paragraph, ParagraphType};
use accumulator::Accumulator;
pub use line_kind::LineKind;

/// Split a document into paragraphs
///
/// Never fails. An unterminated code block at the end of the input is dropped.
///
/// # Parameters
/// * `input` - Full document text; lines are split on `\n`
///
/// # Returns
/// * `Vec<Paragraph>` - Paragraphs in the order they were closed
pub fn segment(input: &str) -> Vec<Paragraph> {
    let mut segmenter = Segmenter::new();
    for line in input.split('\n') {
        segmenter.push_line(line);
    }
    segmenter.finish()
}

/// Single-pass accumulator state machine
#[derive(Debug, Default)]
pub struct Segmenter {
    pending: Accumulator,
    paragraphs: Vec<Paragraph>,
}

impl Segmenter {
    /// Create a segmenter with no output and an empty text buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line of the document
    pub fn push_line(&mut self, line: &str) {
        match LineKind::classify(line) {
            LineKind::PrimaryHeader(text) => self.header(ParagraphType::PrimaryHeader, text),
            LineKind::SecondaryHeader(text) => self.header(ParagraphType::SecondaryHeader, text),
            LineKind::Fence { language } => {
                let closing = self.pending.in_code();
                self.flush();
                if closing {
                    self.pending.reset();
                } else {
                    self.pending.open_code(language);
                }
            }
            LineKind::Plain(text) => {
                if self.pending.in_code() {
                    self.pending.push_code_line(text);
                } else {
                    self.pending.set_line(ParagraphType::Text, text);
                    self.flush();
                }
            }
        }
    }

    /// Consume the segmenter and return the paragraphs emitted so far
    ///
    /// Content still buffered (an open code block) is discarded.
    pub fn finish(self) -> Vec<Paragraph> {
        if self.pending.in_code() {
            log::warn!(
                "Dropping unterminated code block (language '{}', {} lines)",
                self.pending.language(),
                self.pending.line_count()
            );
        }
        self.paragraphs
    }

    fn header(&mut self, kind: ParagraphType, text: &str) {
        self.flush();
        self.pending.set_line(kind, text);
        self.flush();
        self.pending.reset();
    }

    fn flush(&mut self) {
        if let Some(paragraph) = self.pending.flush() {
            log::debug!(
                "Emitting {} paragraph ({} bytes)",
                paragraph.kind,
                paragraph.content.len()
            );
            self.paragraphs.push(paragraph);
        }
    }
}
