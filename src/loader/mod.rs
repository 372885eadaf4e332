//! Record loading from counterparty transaction logs

pub mod delimited;

pub use delimited::*;
