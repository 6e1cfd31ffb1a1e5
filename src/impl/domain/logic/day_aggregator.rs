use fractic_server_error::ServerError;

use crate::entities::{DayBuckets, DayKey, Transaction};

/// Groups transactions into per-day buckets.
///
/// Input order is preserved within each bucket, and days are listed in the
/// order they first appear. With the store's newest-first ordering this yields
/// days in descending order.
pub struct DayAggregator {
    transactions: Vec<Transaction>,
}

impl DayAggregator {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Fails on the first unparseable timestamp; no partial buckets are
    /// returned.
    pub fn process(self) -> Result<DayBuckets, ServerError> {
        let mut day_buckets = DayBuckets::default();
        for tx in self.transactions {
            let day = DayKey::from_created_at(&tx.created_at)?;
            match day_buckets.buckets.get_mut(&day) {
                Some(bucket) => bucket.push(tx),
                None => {
                    day_buckets.day_order.push(day.clone());
                    day_buckets.buckets.insert(day, vec![tx]);
                }
            }
        }
        Ok(day_buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: &str, amount: i64, created_at: &str) -> Transaction {
        Transaction::new(id, amount, created_at, "u1")
    }

    #[test]
    fn groups_by_day_in_first_seen_order() {
        let buckets = DayAggregator::new(vec![
            tx("a", 100, "2024-03-06T09:00:00Z"),
            tx("b", -200, "2024-03-05T15:00:00Z"),
            tx("c", 500, "2024-03-05T10:00:00Z"),
        ])
        .process()
        .unwrap();

        let days: Vec<&str> = buckets.day_order().iter().map(DayKey::as_str).collect();
        assert_eq!(days, vec!["2024_March_06", "2024_March_05"]);

        let march_5 = buckets.bucket(&buckets.day_order()[1]).unwrap();
        let ids: Vec<&str> = march_5.iter().map(|t| t.id.0.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(buckets.num_transactions(), 3);
    }

    #[test]
    fn revisited_day_keeps_its_original_position() {
        let buckets = DayAggregator::new(vec![
            tx("a", 1, "2024-01-02T00:00:00Z"),
            tx("b", 2, "2024-01-01T00:00:00Z"),
            tx("c", 3, "2024-01-02T12:00:00Z"),
        ])
        .process()
        .unwrap();

        assert_eq!(buckets.num_days(), 2);
        assert_eq!(buckets.day_order()[0].as_str(), "2024_January_02");
        assert_eq!(buckets.bucket(&buckets.day_order()[0]).unwrap().len(), 2);
    }

    #[test]
    fn empty_input_gives_empty_buckets() {
        let buckets = DayAggregator::new(vec![]).process().unwrap();
        assert!(buckets.is_empty());
        assert_eq!(buckets.num_transactions(), 0);
    }

    #[test]
    fn malformed_timestamp_aborts_aggregation() {
        let result = DayAggregator::new(vec![
            tx("a", 1, "2024-01-02T00:00:00Z"),
            tx("b", 2, "not-a-date"),
        ])
        .process();
        assert!(result.is_err());
    }
}
