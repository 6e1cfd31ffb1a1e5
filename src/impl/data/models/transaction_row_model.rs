use chrono::{NaiveDateTime, SecondsFormat};

use crate::entities::{Transaction, TransactionId, UserId};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct TransactionRowModel {
    pub(crate) id: String,
    pub(crate) amount: i64,
    pub(crate) balance_before: i64,
    pub(crate) created_at: String,
    pub(crate) user_id: String,
    pub(crate) kind: String,
}

impl From<TransactionRowModel> for Transaction {
    fn from(row: TransactionRowModel) -> Self {
        Transaction {
            id: TransactionId(row.id),
            amount: row.amount,
            balance_before: row.balance_before,
            created_at: with_explicit_offset(row.created_at),
            user_id: UserId(row.user_id),
            kind: row.kind,
        }
    }
}

/// Timestamps without an offset (from `timestamp` columns) are read as UTC.
/// Anything else is kept verbatim and validated during aggregation.
fn with_explicit_offset(created_at: String) -> String {
    match NaiveDateTime::parse_from_str(&created_at, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        Err(_) => created_at,
    }
}
