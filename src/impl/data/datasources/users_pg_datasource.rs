use std::time::Duration;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use sqlx::PgPool;
use tracing::instrument;

use crate::data::{datasources::pg_pool::with_timeout, models::user_row_model::UserRowModel};

const SELECT_USER_BY_EMAIL: &str = r#"
    SELECT id::text AS id, email
    FROM "user"
    WHERE email = $1
"#;

#[async_trait]
pub(crate) trait UsersPgDatasource: Send + Sync {
    async fn fetch_by_email(&self, email: &str) -> Result<Option<UserRowModel>, ServerError>;
}

pub(crate) struct UsersPgDatasourceImpl {
    pool: PgPool,
    query_timeout: Duration,
}

impl UsersPgDatasourceImpl {
    pub(crate) fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl UsersPgDatasource for UsersPgDatasourceImpl {
    #[instrument(skip(self))]
    async fn fetch_by_email(&self, email: &str) -> Result<Option<UserRowModel>, ServerError> {
        with_timeout(
            "select user by email",
            self.query_timeout,
            sqlx::query_as::<_, UserRowModel>(SELECT_USER_BY_EMAIL)
                .bind(email)
                .fetch_optional(&self.pool),
        )
        .await
    }
}
