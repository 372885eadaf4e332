//! Discrepancy checks between two clients' indices
//!
//! Every check compares a `reference` side against an `other` side and
//! reports what the other side is missing or under-reports. Run each check
//! with the arguments swapped to see both counterparties' views.

use crate::reconciliation::index::ClientIndex;
use crate::types::*;

/// Signature shared by every check
pub type Check = fn(&ClientIndex, &ClientIndex) -> Vec<Discrepancy>;

/// Checks in reporting order
pub const CHECKS: [(&str, Check); 3] = [
    ("missing trades", missing_trades),
    ("missing returns", missing_returns),
    ("wrong return quantities", wrong_return_quantities),
];

/// Records of `kind` present on the reference side but absent on the other side
pub fn missing_records(
    kind: RecordKind,
    reference: &ClientIndex,
    other: &ClientIndex,
) -> Vec<Discrepancy> {
    reference
        .records_of(kind)
        .filter(|record| !other.contains(kind, &record.security))
        .map(|record| match kind {
            RecordKind::Trade => Discrepancy::MissingTrade {
                client: other.client.clone(),
                security: record.security.clone(),
                quantity: record.quantity,
            },
            RecordKind::Return => Discrepancy::MissingReturn {
                client: other.client.clone(),
                security: record.security.clone(),
                quantity: record.quantity,
                trade_reference: other
                    .get(RecordKind::Trade, &record.security)
                    .map(|trade| trade.reference.clone()),
            },
        })
        .collect()
}

/// Trades the other side has not recorded
pub fn missing_trades(reference: &ClientIndex, other: &ClientIndex) -> Vec<Discrepancy> {
    missing_records(RecordKind::Trade, reference, other)
}

/// Returns the other side has not recorded
pub fn missing_returns(reference: &ClientIndex, other: &ClientIndex) -> Vec<Discrepancy> {
    missing_records(RecordKind::Return, reference, other)
}

/// Returns the other side recorded with a smaller quantity
///
/// Only under-reporting is flagged; an equal or larger quantity passes.
pub fn wrong_return_quantities(reference: &ClientIndex, other: &ClientIndex) -> Vec<Discrepancy> {
    reference
        .returns()
        .filter_map(|expected| {
            let actual = other.get(RecordKind::Return, &expected.security)?;
            (actual.quantity < expected.quantity).then(|| Discrepancy::WrongReturnQuantity {
                client: other.client.clone(),
                security: expected.security.clone(),
                reference: actual.reference.clone(),
                quantity: actual.quantity,
                expected: expected.quantity,
            })
        })
        .collect()
}
