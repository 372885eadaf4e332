//! Reconciliation of two counterparties' trade and return records
//!
//! The engine loads both sides, organizes each into a [`ClientIndex`], and
//! runs every check in both directions in a fixed order: missing trades,
//! missing returns, then wrong return quantities.

pub mod checks;
pub mod index;
pub mod report;

pub use checks::*;
pub use index::*;
pub use report::*;

use tracing::{debug, info};

use crate::traits::*;
use crate::types::*;

/// Runs the reconciliation checks over two record sources
#[derive(Debug, Clone, Copy)]
pub struct ReconciliationEngine;

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Load and organize one side
    pub fn index<S: RecordSource>(&self, source: &S) -> ReconResult<ClientIndex> {
        let name = source.name();
        let records = source.load()?;
        ClientIndex::organize(&name, records)
    }

    /// Compare two indices in both directions
    pub fn reconcile(&self, left: &ClientIndex, right: &ClientIndex) -> Vec<Discrepancy> {
        let mut discrepancies = Vec::new();

        for (name, check) in CHECKS {
            let forward = check(left, right);
            let backward = check(right, left);
            debug!(
                check = name,
                left = %left.client,
                right = %right.client,
                forward = forward.len(),
                backward = backward.len(),
                "check complete"
            );
            discrepancies.extend(forward);
            discrepancies.extend(backward);
        }

        discrepancies
    }

    /// Load both sides and produce a report
    ///
    /// Fails before comparing anything if either side cannot be loaded.
    pub fn run<L: RecordSource, R: RecordSource>(
        &self,
        left: &L,
        right: &R,
    ) -> ReconResult<ReconciliationReport> {
        let left_index = self.index(left)?;
        let right_index = self.index(right)?;

        let discrepancies = self.reconcile(&left_index, &right_index);
        let report = ReconciliationReport::new(
            left_index.client.clone(),
            right_index.client.clone(),
            discrepancies,
        );

        info!(
            run_id = %report.run_id,
            left = %report.left_client,
            right = %report.right_client,
            discrepancies = report.discrepancies.len(),
            "reconciliation complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_source::MemorySource;

    const SECURITY: &str = "HK345675432";

    fn client1() -> MemorySource {
        MemorySource::new(
            "client1",
            vec![Record::trade(
                "client1".to_string(),
                "ABC98765".to_string(),
                SECURITY.to_string(),
                3000,
            )],
        )
    }

    fn client2() -> MemorySource {
        MemorySource::new(
            "client2",
            vec![
                Record::trade(
                    "client2".to_string(),
                    "ABC98765".to_string(),
                    SECURITY.to_string(),
                    3000,
                ),
                Record::return_of(
                    "client2".to_string(),
                    "ABC98766".to_string(),
                    SECURITY.to_string(),
                    2000,
                    Some("ABC98765".to_string()),
                ),
            ],
        )
    }

    #[test]
    fn test_missing_return_scenario() {
        let engine = ReconciliationEngine::new();

        let report = engine.run(&client1(), &client2()).unwrap();

        assert_eq!(report.left_client, "client1");
        assert_eq!(report.right_client, "client2");
        assert_eq!(
            report.discrepancies,
            vec![Discrepancy::MissingReturn {
                client: "client1".to_string(),
                security: SECURITY.to_string(),
                quantity: 2000,
                trade_reference: Some("ABC98765".to_string()),
            }]
        );
    }

    #[test]
    fn test_output_follows_check_order() {
        let engine = ReconciliationEngine::new();
        let left = ClientIndex::organize(
            "left",
            vec![
                Record::trade("a".to_string(), "T1".to_string(), "ONLY_A".to_string(), 1),
                Record::return_of("a".to_string(), "R1".to_string(), "SHARED".to_string(), 5, None),
            ],
        )
        .unwrap();
        let right = ClientIndex::organize(
            "right",
            vec![
                Record::trade("b".to_string(), "T2".to_string(), "ONLY_B".to_string(), 2),
                Record::return_of("b".to_string(), "R2".to_string(), "SHARED".to_string(), 4, None),
                Record::return_of("b".to_string(), "R3".to_string(), "RET_B".to_string(), 7, None),
            ],
        )
        .unwrap();

        let lines: Vec<String> = engine
            .reconcile(&left, &right)
            .iter()
            .map(|d| d.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "b is missing trade: 1 ONLY_A",
                "a is missing trade: 2 ONLY_B",
                "a is missing return: 7 RET_B against trade unknown",
                "b return R2 for SHARED has quantity 4, should be 5",
            ]
        );
    }

    #[test]
    fn test_load_failure_aborts_run() {
        let engine = ReconciliationEngine::new();
        let empty = MemorySource::new("empty.csv", Vec::new());

        let err = engine.run(&client1(), &empty).unwrap_err();

        assert!(matches!(err, ReconError::EmptyRecordSet(_)));
    }
}
