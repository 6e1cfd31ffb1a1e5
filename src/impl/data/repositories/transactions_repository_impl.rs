use std::time::Duration;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use sqlx::PgPool;

use crate::{
    data::datasources::transactions_pg_datasource::{
        TransactionsPgDatasource, TransactionsPgDatasourceImpl,
    },
    domain::repositories::transactions_repository::TransactionsRepository,
    entities::Transaction,
};

pub(crate) struct TransactionsRepositoryImpl<DS>
where
    DS: TransactionsPgDatasource,
{
    datasource: DS,
}

#[async_trait]
impl<DS> TransactionsRepository for TransactionsRepositoryImpl<DS>
where
    DS: TransactionsPgDatasource,
{
    async fn all_newest_first(&self) -> Result<Vec<Transaction>, ServerError> {
        Ok(self
            .datasource
            .fetch_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl TransactionsRepositoryImpl<TransactionsPgDatasourceImpl> {
    pub(crate) fn new(pool: PgPool, query_timeout: Duration) -> Self {
        TransactionsRepositoryImpl {
            datasource: TransactionsPgDatasourceImpl::new(pool, query_timeout),
        }
    }
}
