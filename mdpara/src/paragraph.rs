//! Paragraph records produced by the segmenter
//!
//! The serialized shape is consumed by existing tools, so the field names
//! (`Type`, `Content`, `Metadata`) and the integer type codes are fixed.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of a paragraph
///
/// Serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ParagraphType {
    /// Level 1 heading (`# Title`)
    PrimaryHeader = 0,
    /// Level 2 heading (`## Title`)
    SecondaryHeader = 1,
    /// A single line of plain text
    Text = 2,
    /// The body of a fenced code block
    Code = 3,
}

impl From<ParagraphType> for u8 {
    fn from(kind: ParagraphType) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for ParagraphType {
    type Error = InvalidParagraphType;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ParagraphType::PrimaryHeader),
            1 => Ok(ParagraphType::SecondaryHeader),
            2 => Ok(ParagraphType::Text),
            3 => Ok(ParagraphType::Code),
            other => Err(InvalidParagraphType(other)),
        }
    }
}

impl fmt::Display for ParagraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimaryHeader => write!(f, "primary header"),
            Self::SecondaryHeader => write!(f, "secondary header"),
            Self::Text => write!(f, "text"),
            Self::Code => write!(f, "code"),
        }
    }
}

/// An integer that does not name a paragraph type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid paragraph type code {0} (expected 0-3)")]
pub struct InvalidParagraphType(pub u8);

/// One classified unit of output content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// What kind of paragraph this is
    #[serde(rename = "Type")]
    pub kind: ParagraphType,

    /// Trimmed text of the paragraph (never empty)
    #[serde(rename = "Content")]
    pub content: String,

    /// Language tag of a code block; empty for every other type
    #[serde(rename = "Metadata")]
    pub metadata: String,
}

impl Paragraph {
    /// Create a paragraph without metadata
    pub fn new(kind: ParagraphType, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            metadata: String::new(),
        }
    }

    /// Create a code paragraph tagged with the fence's language
    pub fn code(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            kind: ParagraphType::Code,
            content: content.into(),
            metadata: language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_codes_match_wire_format() {
        assert_eq!(u8::from(ParagraphType::PrimaryHeader), 0);
        assert_eq!(u8::from(ParagraphType::SecondaryHeader), 1);
        assert_eq!(u8::from(ParagraphType::Text), 2);
        assert_eq!(u8::from(ParagraphType::Code), 3);
    }

    #[test]
    fn test_unknown_type_code_is_rejected() {
        assert_eq!(ParagraphType::try_from(4u8), Err(InvalidParagraphType(4)));
    }

    #[test]
    fn test_serialized_field_names() {
        // Arrange
        let paragraph = Paragraph::code("fn main() {}", "rust");

        // Act
        let json = serde_json::to_string(&paragraph).unwrap();

        // Assert
        assert_eq!(
            json,
            r#"{"Type":3,"Content":"fn main() {}","Metadata":"rust"}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_type() {
        let result: Result<Paragraph, _> =
            serde_json::from_str(r#"{"Type":7,"Content":"x","Metadata":""}"#);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid paragraph type code 7"), "got: {err}");
    }
}
