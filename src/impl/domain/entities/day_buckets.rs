use std::collections::HashMap;

use super::{day_key::DayKey, transaction::Transaction};

/// Transactions grouped per calendar day.
///
/// Every transaction belongs to exactly one bucket, and `day_order` lists each
/// bucket key exactly once, in the order the day was first encountered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayBuckets {
    pub(crate) buckets: HashMap<DayKey, Vec<Transaction>>,
    pub(crate) day_order: Vec<DayKey>,
}

impl DayBuckets {
    pub fn day_order(&self) -> &[DayKey] {
        &self.day_order
    }

    pub fn bucket(&self, day: &DayKey) -> Option<&[Transaction]> {
        self.buckets.get(day).map(Vec::as_slice)
    }

    pub fn num_days(&self) -> usize {
        self.day_order.len()
    }

    pub fn num_transactions(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.day_order.is_empty()
    }
}
