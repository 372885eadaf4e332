//! Core types and data structures for the reconciliation system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Placeholder rendered when a referenced trade cannot be found
pub const UNKNOWN_REFERENCE: &str = "unknown";

/// Kinds of records found in a counterparty's transaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    /// Trade - the initiating transaction for a security
    Trade,
    /// Return - a return against a prior trade
    Return,
}

impl RecordKind {
    /// The single-letter code used in transaction log files
    pub fn code(&self) -> &'static str {
        match self {
            RecordKind::Trade => "T",
            RecordKind::Return => "R",
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T" => Ok(RecordKind::Trade),
            "R" => Ok(RecordKind::Return),
            other => Err(format!(
                "unknown TradeOrReturn code '{}', expected 'T' or 'R'",
                other
            )),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Trade => write!(f, "trade"),
            RecordKind::Return => write!(f, "return"),
        }
    }
}

/// A single trade or return as recorded by one counterparty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Client that owns the transaction log
    pub client: String,
    /// Whether this is a trade or a return
    pub kind: RecordKind,
    /// Client-side reference for the record
    pub reference: String,
    /// Security identifier the record concerns
    pub security: String,
    /// Quantity traded or returned
    pub quantity: i64,
    /// Reference of the originating trade (returns only)
    pub parent: Option<String>,
}

impl Record {
    /// Create a new record
    pub fn new(
        client: String,
        kind: RecordKind,
        reference: String,
        security: String,
        quantity: i64,
        parent: Option<String>,
    ) -> Self {
        Self {
            client,
            kind,
            reference,
            security,
            quantity,
            parent,
        }
    }

    /// Create a trade record
    pub fn trade(client: String, reference: String, security: String, quantity: i64) -> Self {
        Self::new(client, RecordKind::Trade, reference, security, quantity, None)
    }

    /// Create a return record, optionally linked to its originating trade
    pub fn return_of(
        client: String,
        reference: String,
        security: String,
        quantity: i64,
        parent: Option<String>,
    ) -> Self {
        Self::new(client, RecordKind::Return, reference, security, quantity, parent)
    }

    pub fn is_trade(&self) -> bool {
        self.kind == RecordKind::Trade
    }

    pub fn is_return(&self) -> bool {
        self.kind == RecordKind::Return
    }
}

/// A detected inconsistency between two clients' views of the same transactions.
///
/// `client` always names the side that is missing the record or under-reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Discrepancy {
    /// The client has no trade for a security the counterparty traded
    MissingTrade {
        client: String,
        security: String,
        quantity: i64,
    },
    /// The client has no return for a security the counterparty returned
    MissingReturn {
        client: String,
        security: String,
        quantity: i64,
        /// The client's own trade reference for the security, if it has one
        trade_reference: Option<String>,
    },
    /// The client recorded a smaller return than the counterparty
    WrongReturnQuantity {
        client: String,
        security: String,
        reference: String,
        quantity: i64,
        expected: i64,
    },
}

impl Discrepancy {
    /// Client the discrepancy is reported against
    pub fn client(&self) -> &str {
        match self {
            Discrepancy::MissingTrade { client, .. }
            | Discrepancy::MissingReturn { client, .. }
            | Discrepancy::WrongReturnQuantity { client, .. } => client,
        }
    }

    /// Security the discrepancy concerns
    pub fn security(&self) -> &str {
        match self {
            Discrepancy::MissingTrade { security, .. }
            | Discrepancy::MissingReturn { security, .. }
            | Discrepancy::WrongReturnQuantity { security, .. } => security,
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::MissingTrade {
                client,
                security,
                quantity,
            } => write!(f, "{} is missing trade: {} {}", client, quantity, security),
            Discrepancy::MissingReturn {
                client,
                security,
                quantity,
                trade_reference,
            } => write!(
                f,
                "{} is missing return: {} {} against trade {}",
                client,
                quantity,
                security,
                trade_reference.as_deref().unwrap_or(UNKNOWN_REFERENCE)
            ),
            Discrepancy::WrongReturnQuantity {
                client,
                security,
                reference,
                quantity,
                expected,
            } => write!(
                f,
                "{} return {} for {} has quantity {}, should be {}",
                client, reference, security, quantity, expected
            ),
        }
    }
}

/// Errors that can occur while reconciling
#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed record in {origin} at line {line}: {reason}")]
    MalformedRecord {
        origin: String,
        line: u64,
        reason: String,
    },
    #[error("No records found in {0}")]
    EmptyRecordSet(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for reconciliation operations
pub type ReconResult<T> = Result<T, ReconError>;
