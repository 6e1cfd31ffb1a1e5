use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

/// A transaction row as stored in the database. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    /// Signed amount in minor currency units (ex. cents). Positive amounts are
    /// credits ("pays"), negative amounts are debits ("buys").
    pub amount: i64,
    /// User balance right before this transaction, in minor units.
    pub balance_before: i64,
    /// Creation time as an RFC 3339 string, kept verbatim so that day
    /// bucketing happens in the offset the store reported.
    pub created_at: String,
    pub user_id: UserId,
    pub kind: String,
}

// --

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: i64,
        created_at: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId(id.into()),
            amount,
            balance_before: 0,
            created_at: created_at.into(),
            user_id: UserId(user_id.into()),
            kind: String::new(),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
