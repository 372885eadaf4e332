//! Per-client lookup of records by kind and security

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::types::*;

/// One client's records, organized by kind and then by security
///
/// Securities iterate in sorted order, so every check built on top of the
/// index reports in a stable order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientIndex {
    /// Client the records belong to, taken from the first record
    pub client: String,
    by_kind: BTreeMap<RecordKind, BTreeMap<String, Record>>,
    superseded: Vec<Record>,
}

impl ClientIndex {
    /// Build the index for one client's records
    ///
    /// A later record with the same kind and security replaces the earlier
    /// one. Replaced records are kept in [`ClientIndex::superseded`].
    pub fn organize(origin: &str, records: Vec<Record>) -> ReconResult<Self> {
        let client = records
            .first()
            .map(|r| r.client.clone())
            .ok_or_else(|| ReconError::EmptyRecordSet(origin.to_string()))?;

        let mut by_kind: BTreeMap<RecordKind, BTreeMap<String, Record>> = BTreeMap::new();
        let mut superseded = Vec::new();

        for record in records {
            if record.client != client {
                warn!(
                    origin,
                    expected = %client,
                    found = %record.client,
                    reference = %record.reference,
                    "record belongs to a different client"
                );
            }

            let kind = record.kind;
            if let Some(previous) = by_kind
                .entry(kind)
                .or_default()
                .insert(record.security.clone(), record)
            {
                warn!(
                    origin,
                    client = %client,
                    %kind,
                    security = %previous.security,
                    reference = %previous.reference,
                    "duplicate {} for security, keeping the later record",
                    kind
                );
                superseded.push(previous);
            }
        }

        let index = Self {
            client,
            by_kind,
            superseded,
        };
        debug!(
            origin,
            client = %index.client,
            trades = index.count(RecordKind::Trade),
            returns = index.count(RecordKind::Return),
            "organized records"
        );
        Ok(index)
    }

    /// Look up the record of a kind for a security
    pub fn get(&self, kind: RecordKind, security: &str) -> Option<&Record> {
        self.by_kind.get(&kind).and_then(|m| m.get(security))
    }

    pub fn contains(&self, kind: RecordKind, security: &str) -> bool {
        self.get(kind, security).is_some()
    }

    /// Records of a kind, ordered by security
    pub fn records_of(&self, kind: RecordKind) -> impl Iterator<Item = &Record> {
        self.by_kind.get(&kind).into_iter().flat_map(|m| m.values())
    }

    pub fn trades(&self) -> impl Iterator<Item = &Record> {
        self.records_of(RecordKind::Trade)
    }

    pub fn returns(&self) -> impl Iterator<Item = &Record> {
        self.records_of(RecordKind::Return)
    }

    /// Number of indexed records of a kind
    pub fn count(&self, kind: RecordKind) -> usize {
        self.by_kind.get(&kind).map_or(0, |m| m.len())
    }

    /// Records dropped because a later record had the same kind and security
    pub fn superseded(&self) -> &[Record] {
        &self.superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(reference: &str, security: &str, quantity: i64) -> Record {
        Record::trade(
            "client1".to_string(),
            reference.to_string(),
            security.to_string(),
            quantity,
        )
    }

    #[test]
    fn test_organize_by_kind_and_security() {
        let records = vec![
            trade("ABC98765", "HK345675432", 3000),
            Record::return_of(
                "client1".to_string(),
                "ABC98766".to_string(),
                "HK345675432".to_string(),
                2000,
                Some("ABC98765".to_string()),
            ),
        ];

        let index = ClientIndex::organize("client1.csv", records).unwrap();

        assert_eq!(index.client, "client1");
        assert_eq!(index.count(RecordKind::Trade), 1);
        assert_eq!(index.count(RecordKind::Return), 1);
        assert_eq!(
            index.get(RecordKind::Trade, "HK345675432").unwrap().reference,
            "ABC98765"
        );
        assert_eq!(
            index.get(RecordKind::Return, "HK345675432").unwrap().quantity,
            2000
        );
        assert!(!index.contains(RecordKind::Trade, "US0000000001"));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = ClientIndex::organize("client1.csv", Vec::new()).unwrap_err();

        assert!(matches!(err, ReconError::EmptyRecordSet(ref origin) if origin == "client1.csv"));
    }

    #[test]
    fn test_duplicate_security_last_write_wins() {
        let records = vec![
            trade("FIRST", "HK345675432", 1000),
            trade("SECOND", "HK345675432", 2000),
        ];

        let index = ClientIndex::organize("client1.csv", records).unwrap();

        assert_eq!(index.count(RecordKind::Trade), 1);
        assert_eq!(
            index.get(RecordKind::Trade, "HK345675432").unwrap().reference,
            "SECOND"
        );
        assert_eq!(index.superseded().len(), 1);
        assert_eq!(index.superseded()[0].reference, "FIRST");
    }

    #[test]
    fn test_records_iterate_in_security_order() {
        let records = vec![
            trade("T3", "SEC3", 1),
            trade("T1", "SEC1", 1),
            trade("T2", "SEC2", 1),
        ];

        let index = ClientIndex::organize("client1.csv", records).unwrap();
        let securities: Vec<&str> = index.trades().map(|r| r.security.as_str()).collect();

        assert_eq!(securities, vec!["SEC1", "SEC2", "SEC3"]);
        assert_eq!(index.returns().count(), 0);
    }
}
