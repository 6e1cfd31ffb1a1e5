use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    domain::{
        logic::{balance_summarizer::BalanceSummarizer, day_aggregator::DayAggregator},
        repositories::transactions_repository::TransactionsRepository,
    },
    entities::BalanceSummary,
};

#[async_trait]
pub trait MoneyReportUsecase: Send + Sync {
    /// Fetches a fresh snapshot of all transactions and summarizes it per day.
    async fn summarize(&self) -> Result<BalanceSummary, ServerError>;
}

pub(crate) struct MoneyReportUsecaseImpl<R1>
where
    R1: TransactionsRepository,
{
    transactions_repository: R1,
}

#[async_trait]
impl<R1> MoneyReportUsecase for MoneyReportUsecaseImpl<R1>
where
    R1: TransactionsRepository,
{
    async fn summarize(&self) -> Result<BalanceSummary, ServerError> {
        let transactions = self.transactions_repository.all_newest_first().await?;
        let day_buckets = DayAggregator::new(transactions).process()?;
        debug!(
            days = day_buckets.num_days(),
            transactions = day_buckets.num_transactions(),
            "aggregated transactions by day"
        );
        BalanceSummarizer::new(&day_buckets).process()
    }
}

impl<R1: TransactionsRepository> MoneyReportUsecaseImpl<R1> {
    pub(crate) fn new(transactions_repository: R1) -> Self {
        MoneyReportUsecaseImpl {
            transactions_repository,
        }
    }
}
