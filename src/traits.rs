//! Traits for record source abstraction

use crate::types::*;

/// Source of a counterparty's transaction records
///
/// This trait decouples the reconciliation logic from the format the
/// records arrive in. Implement it to support a new file layout without
/// touching the indexer or the checks.
pub trait RecordSource {
    /// Human-readable name used in errors and logs (usually a file path)
    fn name(&self) -> String;

    /// Load every record, in source order
    fn load(&self) -> ReconResult<Vec<Record>>;
}
