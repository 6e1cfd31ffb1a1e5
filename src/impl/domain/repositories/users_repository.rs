use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::User;

#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// The user with exactly this email, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServerError>;
}
