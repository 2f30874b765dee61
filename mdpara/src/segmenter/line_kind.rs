//! Classification of a single input line

use regex::Regex;
use std::sync::OnceLock;

/// Marker that opens and closes a code block
const FENCE: &str = "```";

// ASCII whitespace only: a no-break space or vertical tab after `#` does not make a header
static PRIMARY_HEADER: OnceLock<Regex> = OnceLock::new();
static SECONDARY_HEADER: OnceLock<Regex> = OnceLock::new();

fn primary_header() -> &'static Regex {
    PRIMARY_HEADER
        .get_or_init(|| Regex::new(r"^#[\t\n\x0C\r ]+.*$").expect("Invalid primary header regex"))
}

fn secondary_header() -> &'static Regex {
    SECONDARY_HEADER
        .get_or_init(|| {
            Regex::new(r"^##[\t\n\x0C\r ]+.*$").expect("Invalid secondary header regex")
        })
}

/// What a line means to the segmenter, with the text it contributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# Title`, carrying the trimmed title
    PrimaryHeader(&'a str),
    /// `## Title`, carrying the trimmed title
    SecondaryHeader(&'a str),
    /// A line starting with three backticks, carrying the language tag (may be empty)
    Fence {
        /// Tag after the backticks, up to the first space
        language: &'a str,
    },
    /// Anything else, carrying the trimmed line
    Plain(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a line
    ///
    /// Checks run in priority order: primary header, secondary header, fence,
    /// plain. The primary pattern requires whitespace right after a single `#`,
    /// so `## Title` never matches it.
    pub fn classify(line: &'a str) -> Self {
        if primary_header().is_match(line) {
            return LineKind::PrimaryHeader(strip_marker(line, "#"));
        }
        if secondary_header().is_match(line) {
            return LineKind::SecondaryHeader(strip_marker(line, "##"));
        }
        if line.starts_with(FENCE) {
            return LineKind::Fence {
                language: fence_language(line),
            };
        }
        LineKind::Plain(line.trim())
    }
}

fn strip_marker<'a>(line: &'a str, marker: &str) -> &'a str {
    line.strip_prefix(marker).unwrap_or(line).trim()
}

/// Language tag of a fence line: everything before the first space, minus the backticks
fn fence_language(line: &str) -> &str {
    let head = line.split(' ').next().unwrap_or_default();
    head.strip_prefix(FENCE).unwrap_or(head).trim()
}
