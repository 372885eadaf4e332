//! Delimited transaction log files
//!
//! Each line holds six positional fields and there is no header row:
//!
//! ```text
//! Client,TradeOrReturn,Reference,Security,Quantity,Parent
//! client1,T,ABC98765,HK345675432,3000,
//! client1,R,ABC98766,HK345675432,2000,ABC98765
//! ```

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::traits::*;
use crate::types::*;

/// Number of columns in a transaction log line
pub const FIELD_COUNT: usize = 6;

/// One line of a delimited file, in file order
#[derive(Debug, Deserialize)]
struct RawRow {
    client: String,
    trade_or_return: String,
    reference: String,
    security: String,
    quantity: String,
    parent: Option<String>,
}

impl RawRow {
    fn into_record(self) -> Result<Record, String> {
        let kind = self.trade_or_return.parse::<RecordKind>()?;
        let quantity = self
            .quantity
            .parse::<i64>()
            .map_err(|e| format!("invalid Quantity '{}': {}", self.quantity, e))?;

        Ok(Record::new(
            self.client,
            kind,
            self.reference,
            self.security,
            quantity,
            self.parent.filter(|p| !p.is_empty()),
        ))
    }
}

/// Record source backed by a delimited file on disk
#[derive(Debug, Clone)]
pub struct DelimitedFileSource {
    path: PathBuf,
    delimiter: u8,
}

impl DelimitedFileSource {
    /// Create a comma-delimited source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl RecordSource for DelimitedFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> ReconResult<Vec<Record>> {
        let file = File::open(&self.path).map_err(|source| ReconError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records = parse_records(&self.name(), file, self.delimiter)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}

/// Parse delimited records from any reader
///
/// `origin` names the input in error messages. Blank lines are skipped; any
/// other line that does not hold exactly six fields, a `T`/`R` code and an
/// integer quantity fails the whole parse.
pub fn parse_records<R: Read>(origin: &str, reader: R, delimiter: u8) -> ReconResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let malformed = |reason: String| ReconError::MalformedRecord {
            origin: origin.to_string(),
            line,
            reason,
        };

        if row.len() != FIELD_COUNT {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                row.len()
            )));
        }

        let raw: RawRow = row
            .deserialize(None)
            .map_err(|e| malformed(e.to_string()))?;
        records.push(raw.into_record().map_err(malformed)?);
    }

    Ok(records)
}
