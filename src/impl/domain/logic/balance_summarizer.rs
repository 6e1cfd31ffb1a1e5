use fractic_server_error::ServerError;

use crate::{
    entities::{BalanceSummary, DayBuckets, DayKey, DaySummary, Transaction},
    errors::{BalanceOverflow, DayBucketMissing},
};

/// Computes per-day and grand totals over aggregated day buckets.
pub struct BalanceSummarizer<'a> {
    day_buckets: &'a DayBuckets,
}

impl<'a> BalanceSummarizer<'a> {
    pub fn new(day_buckets: &'a DayBuckets) -> Self {
        Self { day_buckets }
    }

    pub fn process(&self) -> Result<BalanceSummary, ServerError> {
        let mut summary = BalanceSummary::default();
        for day in self.day_buckets.day_order() {
            // Unreachable for buckets built by DayAggregator.
            let transactions = self
                .day_buckets
                .bucket(day)
                .ok_or_else(|| DayBucketMissing::new(day.as_str()))?;
            let day_summary = summarize_day(day.clone(), transactions)?;
            summary.total = summary
                .total
                .checked_add(day_summary.day_total)
                .ok_or_else(|| BalanceOverflow::new("total"))?;
            summary.days.push(day_summary);
        }
        Ok(summary)
    }
}

fn summarize_day(day: DayKey, transactions: &[Transaction]) -> Result<DaySummary, ServerError> {
    let overflow = || BalanceOverflow::new(day.as_str());
    let mut pays: i64 = 0;
    let mut buys: i64 = 0;
    for tx in transactions {
        if tx.amount > 0 {
            pays = pays.checked_add(tx.amount).ok_or_else(overflow)?;
        } else if tx.amount < 0 {
            let debit = tx.amount.checked_neg().ok_or_else(overflow)?;
            buys = buys.checked_add(debit).ok_or_else(overflow)?;
        }
    }
    let day_total = pays.checked_sub(buys).ok_or_else(overflow)?;
    Ok(DaySummary {
        day,
        count: transactions.len(),
        pays,
        buys,
        day_total,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::logic::DayAggregator;

    fn tx(amount: i64, created_at: &str) -> Transaction {
        Transaction::new("id", amount, created_at, "u1")
    }

    #[test]
    fn splits_pays_and_buys_per_day() {
        let buckets = DayAggregator::new(vec![
            tx(500, "2024-03-05T10:00:00Z"),
            tx(-200, "2024-03-05T15:00:00Z"),
            tx(100, "2024-03-06T09:00:00Z"),
        ])
        .process()
        .unwrap();

        let summary = BalanceSummarizer::new(&buckets).process().unwrap();

        assert_eq!(summary.days.len(), 2);
        let first = &summary.days[0];
        assert_eq!(first.day.as_str(), "2024_March_05");
        assert_eq!((first.count, first.pays, first.buys, first.day_total), (2, 500, 200, 300));
        let second = &summary.days[1];
        assert_eq!(second.day.as_str(), "2024_March_06");
        assert_eq!((second.count, second.pays, second.buys, second.day_total), (1, 100, 0, 100));
        assert_eq!(summary.total, 400);
    }

    #[test]
    fn zero_amount_counts_but_adds_nothing() {
        let buckets = DayAggregator::new(vec![
            tx(0, "2024-03-05T10:00:00Z"),
            tx(-50, "2024-03-05T11:00:00Z"),
        ])
        .process()
        .unwrap();

        let summary = BalanceSummarizer::new(&buckets).process().unwrap();

        let day = &summary.days[0];
        assert_eq!(day.count, 2);
        assert_eq!(day.pays, 0);
        assert_eq!(day.buys, 50);
        assert_eq!(day.day_total, -50);
        assert_eq!(summary.total, -50);
    }

    #[test]
    fn empty_buckets_summarize_to_zero() {
        let summary = BalanceSummarizer::new(&DayBuckets::default())
            .process()
            .unwrap();
        assert!(summary.days.is_empty());
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn overflowing_amounts_are_an_error() {
        let min = DayAggregator::new(vec![tx(i64::MIN, "2024-03-05T10:00:00Z")])
            .process()
            .unwrap();
        assert!(BalanceSummarizer::new(&min).process().is_err());

        let two_max = DayAggregator::new(vec![
            tx(i64::MAX, "2024-03-05T10:00:00Z"),
            tx(1, "2024-03-05T11:00:00Z"),
        ])
        .process()
        .unwrap();
        assert!(BalanceSummarizer::new(&two_max).process().is_err());
    }

    #[test]
    fn overflowing_grand_total_is_an_error() {
        let buckets = DayAggregator::new(vec![
            tx(i64::MAX, "2024-03-05T10:00:00Z"),
            tx(i64::MAX, "2024-03-06T10:00:00Z"),
        ])
        .process()
        .unwrap();
        assert!(BalanceSummarizer::new(&buckets).process().is_err());
    }

    #[test]
    fn large_amounts_within_range_still_sum() {
        let buckets = DayAggregator::new(vec![
            tx(i64::MAX, "2024-03-05T10:00:00Z"),
            tx(-i64::MAX, "2024-03-06T10:00:00Z"),
        ])
        .process()
        .unwrap();
        let summary = BalanceSummarizer::new(&buckets).process().unwrap();
        assert_eq!(summary.days[1].buys, i64::MAX);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn missing_bucket_is_an_error() {
        let inconsistent = DayBuckets {
            buckets: HashMap::new(),
            day_order: vec![DayKey::from_created_at("2024-03-05T10:00:00Z").unwrap()],
        };
        assert!(BalanceSummarizer::new(&inconsistent).process().is_err());
    }
}
