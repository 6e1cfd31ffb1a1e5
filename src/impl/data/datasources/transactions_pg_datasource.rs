use std::time::Duration;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::data::{
    datasources::pg_pool::with_timeout, models::transaction_row_model::TransactionRowModel,
};

// `createdAt` is rendered as RFC 3339 in UTC. The session runs with
// `TimeZone=UTC`, so a `timestamp` column without zone is read as UTC.
const SELECT_TRANSACTIONS: &str = r#"
    SELECT
        id::text AS id,
        amount::bigint AS amount,
        "balanceBefore"::bigint AS balance_before,
        to_char(
            "createdAt"::timestamptz AT TIME ZONE 'UTC',
            'YYYY-MM-DD"T"HH24:MI:SS.US"Z"'
        ) AS created_at,
        "userId"::text AS user_id,
        type::text AS kind
    FROM "transaction"
    ORDER BY "createdAt" DESC
"#;

#[async_trait]
pub(crate) trait TransactionsPgDatasource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<TransactionRowModel>, ServerError>;
}

pub(crate) struct TransactionsPgDatasourceImpl {
    pool: PgPool,
    query_timeout: Duration,
}

impl TransactionsPgDatasourceImpl {
    pub(crate) fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl TransactionsPgDatasource for TransactionsPgDatasourceImpl {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<TransactionRowModel>, ServerError> {
        let rows = with_timeout(
            "select transactions",
            self.query_timeout,
            sqlx::query_as::<_, TransactionRowModel>(SELECT_TRANSACTIONS).fetch_all(&self.pool),
        )
        .await?;
        debug!(rows = rows.len(), "fetched transactions");
        Ok(rows)
    }
}
