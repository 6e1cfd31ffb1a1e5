use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::Transaction;

#[async_trait]
pub trait TransactionsRepository: Send + Sync {
    /// Every stored transaction, newest first. The whole table is loaded into
    /// memory.
    async fn all_newest_first(&self) -> Result<Vec<Transaction>, ServerError>;
}
