//! In-memory record source for testing

use crate::traits::*;
use crate::types::*;

/// In-memory record source for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    records: Vec<Record>,
}

impl MemorySource {
    /// Create a new memory source holding the given records
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Append a record (builder style)
    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl RecordSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> ReconResult<Vec<Record>> {
        Ok(self.records.clone())
    }
}
