//! Reconciliation report and its plain-text rendering

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use uuid::Uuid;

use crate::types::*;

/// Outcome of reconciling two clients' records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Unique identifier for this run
    pub run_id: Uuid,
    /// When the report was produced
    pub generated_at: NaiveDateTime,
    /// Client on the first (left) side
    pub left_client: String,
    /// Client on the second (right) side
    pub right_client: String,
    /// Discrepancies in reporting order
    pub discrepancies: Vec<Discrepancy>,
}

impl ReconciliationReport {
    /// Create a new report
    pub fn new(left_client: String, right_client: String, discrepancies: Vec<Discrepancy>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: chrono::Utc::now().naive_utc(),
            left_client,
            right_client,
            discrepancies,
        }
    }

    /// Whether the two sides agree completely
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Discrepancies reported against one client
    pub fn discrepancies_for<'a>(&'a self, client: &'a str) -> impl Iterator<Item = &'a Discrepancy> {
        self.discrepancies.iter().filter(move |d| d.client() == client)
    }

    /// One human-readable line per discrepancy
    pub fn lines(&self) -> Vec<String> {
        self.discrepancies.iter().map(|d| d.to_string()).collect()
    }

    /// Write the report lines; writes nothing for a clean report
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for discrepancy in &self.discrepancies {
            writeln!(out, "{}", discrepancy)?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReconciliationReport {
        ReconciliationReport::new(
            "client1".to_string(),
            "client2".to_string(),
            vec![
                Discrepancy::MissingTrade {
                    client: "client2".to_string(),
                    security: "HK345675432".to_string(),
                    quantity: 3000,
                },
                Discrepancy::MissingReturn {
                    client: "client1".to_string(),
                    security: "HK345675432".to_string(),
                    quantity: 2000,
                    trade_reference: Some("ABC98765".to_string()),
                },
            ],
        )
    }

    #[test]
    fn test_write_to_emits_one_line_per_discrepancy() {
        let report = sample();
        let mut out = Vec::new();

        report.write_to(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "client2 is missing trade: 3000 HK345675432\n\
             client1 is missing return: 2000 HK345675432 against trade ABC98765\n"
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_clean_report_writes_nothing() {
        let report = ReconciliationReport::new("client1".to_string(), "client2".to_string(), Vec::new());
        let mut out = Vec::new();

        report.write_to(&mut out).unwrap();

        assert!(out.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_discrepancies_for_client() {
        let report = sample();

        assert_eq!(report.discrepancies_for("client1").count(), 1);
        assert_eq!(report.discrepancies_for("client2").count(), 1);
        assert_eq!(report.discrepancies_for("client3").count(), 0);
    }
}
