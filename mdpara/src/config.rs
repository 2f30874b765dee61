//! Run configuration: where to read Markdown from and where to write JSON to

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Validated input and output paths for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    input: PathBuf,
    output: PathBuf,
}

impl RunConfig {
    /// Build a configuration from the two required paths
    ///
    /// # Parameters
    /// * `input` - Source Markdown file (`--in`)
    /// * `output` - Destination JSON file (`--out`)
    ///
    /// # Returns
    /// * `Ok(RunConfig)` - Both paths are non-empty
    /// * `Err(ConfigError)` - One of the paths is empty
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let input = input.into();
        let output = output.into();

        if input.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { flag: "--in" });
        }
        if output.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { flag: "--out" });
        }

        Ok(Self { input, output })
    }

    /// Source Markdown file
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Destination JSON file
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Errors in the command-line configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required path was given as an empty string
    #[error("{flag} requires a non-empty path")]
    EmptyPath {
        /// The flag that was empty
        flag: &'static str,
    },
}
