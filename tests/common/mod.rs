#![allow(dead_code)]

use async_trait::async_trait;
use balance_report::{
    entities::{Transaction, User},
    repositories::{TransactionsRepository, UsersRepository},
    util::BalanceReportUtil,
};
use fractic_server_error::ServerError;

pub struct InMemoryTransactions(pub Vec<Transaction>);

#[async_trait]
impl TransactionsRepository for InMemoryTransactions {
    async fn all_newest_first(&self) -> Result<Vec<Transaction>, ServerError> {
        Ok(self.0.clone())
    }
}

pub struct InMemoryUsers(pub Vec<User>);

#[async_trait]
impl UsersRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServerError> {
        Ok(self.0.iter().find(|u| u.email == email).cloned())
    }
}

pub fn tx(amount: i64, created_at: &str) -> Transaction {
    Transaction::new(format!("tx-{}", created_at), amount, created_at, "user-1")
}

pub fn util_with(transactions: Vec<Transaction>, users: Vec<User>) -> BalanceReportUtil {
    BalanceReportUtil::with_repositories(InMemoryTransactions(transactions), InMemoryUsers(users))
}

pub fn scenario_transactions() -> Vec<Transaction> {
    vec![
        tx(500, "2024-03-05T10:00:00Z"),
        tx(-200, "2024-03-05T15:00:00Z"),
        tx(100, "2024-03-06T09:00:00Z"),
    ]
}
