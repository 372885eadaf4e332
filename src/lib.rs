//! # Trade Recon
//!
//! Reconciles trade and return records between two counterparties'
//! transaction logs and reports the discrepancies between them.
//!
//! ## Features
//!
//! - **Record loading**: Six-column delimited files behind a pluggable `RecordSource`
//! - **Indexing**: Per-client lookup of trades and returns by security
//! - **Missing trades and returns**: Checked in both directions
//! - **Return quantities**: Flags a counterparty that under-reports a return
//! - **Reporting**: One plain-text line per discrepancy
//!
//! ## Quick Start
//!
//! ```rust
//! use trade_recon::{utils::MemorySource, Record, ReconciliationEngine};
//!
//! let client1 = MemorySource::new("client1", vec![Record::trade(
//!     "client1".to_string(),
//!     "ABC98765".to_string(),
//!     "HK345675432".to_string(),
//!     3000,
//! )]);
//! let client2 = MemorySource::new("client2", vec![Record::trade(
//!     "client2".to_string(),
//!     "XYZ00001".to_string(),
//!     "HK345675432".to_string(),
//!     3000,
//! )]);
//!
//! let report = ReconciliationEngine::new().run(&client1, &client2).unwrap();
//! assert!(report.is_clean());
//! ```

pub mod config;
pub mod loader;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use loader::*;
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
