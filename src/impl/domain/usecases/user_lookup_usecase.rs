use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::repositories::users_repository::UsersRepository, entities::User, errors::UserNotFound,
};

#[async_trait]
pub trait UserLookupUsecase: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServerError>;

    /// Like `find_by_email`, but a missing user is an error.
    async fn get_by_email(&self, email: &str) -> Result<User, ServerError> {
        self.find_by_email(email)
            .await?
            .ok_or_else(|| UserNotFound::new(email))
    }
}

pub(crate) struct UserLookupUsecaseImpl<R1>
where
    R1: UsersRepository,
{
    users_repository: R1,
}

#[async_trait]
impl<R1> UserLookupUsecase for UserLookupUsecaseImpl<R1>
where
    R1: UsersRepository,
{
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServerError> {
        self.users_repository.find_by_email(email).await
    }
}

impl<R1: UsersRepository> UserLookupUsecaseImpl<R1> {
    pub(crate) fn new(users_repository: R1) -> Self {
        UserLookupUsecaseImpl { users_repository }
    }
}
