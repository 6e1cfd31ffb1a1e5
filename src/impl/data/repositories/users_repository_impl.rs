use std::time::Duration;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use sqlx::PgPool;

use crate::{
    data::datasources::users_pg_datasource::{UsersPgDatasource, UsersPgDatasourceImpl},
    domain::repositories::users_repository::UsersRepository,
    entities::User,
};

pub(crate) struct UsersRepositoryImpl<DS>
where
    DS: UsersPgDatasource,
{
    datasource: DS,
}

#[async_trait]
impl<DS> UsersRepository for UsersRepositoryImpl<DS>
where
    DS: UsersPgDatasource,
{
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServerError> {
        Ok(self.datasource.fetch_by_email(email).await?.map(Into::into))
    }
}

impl UsersRepositoryImpl<UsersPgDatasourceImpl> {
    pub(crate) fn new(pool: PgPool, query_timeout: Duration) -> Self {
        UsersRepositoryImpl {
            datasource: UsersPgDatasourceImpl::new(pool, query_timeout),
        }
    }
}
