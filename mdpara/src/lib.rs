//! mdpara - Markdown to paragraph records
//!
//! Splits a Markdown document into primary headers, secondary headers, text
//! lines and fenced code blocks, and serializes them as a JSON array of
//! `{"Type", "Content", "Metadata"}` objects.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod config;
mod paragraph;
mod pipeline;
mod segmenter;

pub use config::{ConfigError, RunConfig};
pub use paragraph::{InvalidParagraphType, Paragraph, ParagraphType};
pub use pipeline::{convert, markdown_to_json, to_json, ConvertError};
pub use segmenter::{segment, LineKind, Segmenter};
