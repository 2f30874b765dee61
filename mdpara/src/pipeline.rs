//! Conversion pipeline
//!
//! 1. **Read**: load the Markdown source; invalid UTF-8 becomes U+FFFD
//! 2. **Segment**: split it into paragraphs
//! 3. **Serialize**: encode the paragraphs as a compact JSON array
//! 4. **Write**: persist the JSON to the output path
//!
//! Any failure aborts the run; nothing is written unless every earlier stage succeeded.

use crate::config::RunConfig;
use crate::paragraph::Paragraph;
use crate::segmenter::segment;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Run a full conversion
///
/// # Parameters
/// * `config` - Validated input and output paths
///
/// # Returns
/// * `Ok(usize)` - Number of paragraphs written
/// * `Err(ConvertError)` - Reading, serializing or writing failed
pub fn convert(config: &RunConfig) -> Result<usize, ConvertError> {
    let markdown = read_markdown(config.input())?;

    let paragraphs = segment(&markdown);
    let json = to_json(&paragraphs)?;

    write_json(config.output(), &json)?;
    log::info!(
        "Wrote {} paragraphs to {}",
        paragraphs.len(),
        config.output().display()
    );

    Ok(paragraphs.len())
}

/// Segment a Markdown document and encode the result as JSON
pub fn markdown_to_json(markdown: &str) -> Result<Vec<u8>, ConvertError> {
    to_json(&segment(markdown))
}

/// Encode paragraphs as a compact JSON array
pub fn to_json(paragraphs: &[Paragraph]) -> Result<Vec<u8>, ConvertError> {
    Ok(serde_json::to_vec(paragraphs)?)
}

fn read_markdown(path: &Path) -> Result<String, ConvertError> {
    let bytes = std::fs::read(path).map_err(|e| ConvertError::ReadInput(path.to_path_buf(), e))?;
    log::info!("Read {} bytes from {}", bytes.len(), path.display());

    let markdown = match String::from_utf8(bytes) {
        Ok(markdown) => markdown,
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8; invalid bytes were replaced with U+FFFD",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(markdown)
}

fn write_json(path: &Path, json: &[u8]) -> Result<(), ConvertError> {
    std::fs::write(path, json).map_err(|e| ConvertError::WriteOutput(path.to_path_buf(), e))
}

/// Conversion errors
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The Markdown source could not be read
    #[error("IO error reading {path}: {source}", path = .0.display(), source = .1)]
    ReadInput(PathBuf, #[source] std::io::Error),

    /// The paragraphs could not be encoded as JSON
    #[error("Failed to serialize paragraphs: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The JSON could not be written
    #[error("IO error writing {path}: {source}", path = .0.display(), source = .1)]
    WriteOutput(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraph::ParagraphType;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_markdown_to_json_wire_format() {
        // Arrange
        let markdown = "# Title\n## Sub\nhello\n```go\nfmt.Println(1)\n```";

        // Act
        let json = String::from_utf8(markdown_to_json(markdown).unwrap()).unwrap();

        // Assert
        assert_eq!(
            json,
            concat!(
                r#"[{"Type":0,"Content":"Title","Metadata":""},"#,
                r#"{"Type":1,"Content":"Sub","Metadata":""},"#,
                r#"{"Type":2,"Content":"hello","Metadata":""},"#,
                r#"{"Type":3,"Content":"fmt.Println(1)","Metadata":"go"}]"#,
            )
        );
    }

    #[test]
    fn test_empty_document_is_empty_array() {
        assert_eq!(markdown_to_json("").unwrap(), b"[]");
    }

    #[test]
    fn test_json_round_trip() {
        // Arrange
        let paragraphs = segment("# A\n\"quoted\" \\ text\n```\nline1\nline2\n```\n## B");

        // Act
        let json = to_json(&paragraphs).unwrap();
        let decoded: Vec<Paragraph> = serde_json::from_slice(&json).unwrap();

        // Assert
        assert_eq!(decoded, paragraphs);
    }

    #[test]
    fn test_convert_writes_output() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.md");
        let output = dir.path().join("doc.json");
        std::fs::write(&input, "# Doc\nbody\n").unwrap();
        let config = RunConfig::new(&input, &output).unwrap();

        // Act
        let count = convert(&config).unwrap();

        // Assert
        assert_eq!(count, 2);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            r#"[{"Type":0,"Content":"Doc","Metadata":""},{"Type":2,"Content":"body","Metadata":""}]"#
        );
    }

    #[test]
    fn test_convert_missing_input() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        let config = RunConfig::new(dir.path().join("missing.md"), &output).unwrap();

        // Act
        let result = convert(&config);

        // Assert: read failure is reported and nothing is written
        assert!(matches!(result, Err(ConvertError::ReadInput(..))));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_replaces_invalid_utf8() {
        // Arrange: Latin-1 encoded "Café"
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("latin1.md");
        let output = dir.path().join("latin1.json");
        std::fs::write(&input, b"# Caf\xe9\nplain\n").unwrap();
        let config = RunConfig::new(&input, &output).unwrap();

        // Act
        let count = convert(&config).unwrap();

        // Assert
        assert_eq!(count, 2);
        let decoded: Vec<Paragraph> =
            serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!(
            decoded,
            vec![
                Paragraph::new(ParagraphType::PrimaryHeader, "Caf\u{fffd}"),
                Paragraph::new(ParagraphType::Text, "plain"),
            ]
        );
    }

    #[test]
    fn test_convert_unwritable_output() {
        // Arrange: the output's parent directory does not exist
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.md");
        std::fs::write(&input, "text").unwrap();
        let output = dir.path().join("no-such-dir").join("out.json");
        let config = RunConfig::new(&input, &output).unwrap();

        // Act
        let result = convert(&config);

        // Assert
        match result {
            Err(ConvertError::WriteOutput(path, _)) => assert_eq!(path, output),
            other => panic!("expected WriteOutput error, got {other:?}"),
        }
    }
}
