//! Run configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::loader::DelimitedFileSource;
use crate::types::*;

/// File the first counterparty's records are read from by default
pub const DEFAULT_LEFT_PATH: &str = "client1.csv";
/// File the second counterparty's records are read from by default
pub const DEFAULT_RIGHT_PATH: &str = "client2.csv";

/// Inputs for a reconciliation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconConfig {
    /// First counterparty's transaction log
    pub left_path: PathBuf,
    /// Second counterparty's transaction log
    pub right_path: PathBuf,
    /// Field delimiter shared by both files
    pub delimiter: char,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            left_path: PathBuf::from(DEFAULT_LEFT_PATH),
            right_path: PathBuf::from(DEFAULT_RIGHT_PATH),
            delimiter: ',',
        }
    }
}

impl ReconConfig {
    /// Create a configuration for two paths with the default delimiter
    pub fn new(left_path: impl Into<PathBuf>, right_path: impl Into<PathBuf>) -> Self {
        Self {
            left_path: left_path.into(),
            right_path: right_path.into(),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> ReconResult<()> {
        if !self.delimiter.is_ascii() {
            return Err(ReconError::Config(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }

        if self.delimiter == '\n' || self.delimiter == '\r' || self.delimiter == '"' {
            return Err(ReconError::Config(format!(
                "delimiter {:?} cannot be used as a field separator",
                self.delimiter
            )));
        }

        Ok(())
    }

    /// Build the two record sources described by this configuration
    pub fn sources(&self) -> ReconResult<(DelimitedFileSource, DelimitedFileSource)> {
        self.validate()?;
        let delimiter = self.delimiter as u8;

        Ok((
            DelimitedFileSource::new(&self.left_path).with_delimiter(delimiter),
            DelimitedFileSource::new(&self.right_path).with_delimiter(delimiter),
        ))
    }
}
