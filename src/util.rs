use std::io::{BufRead, Write};

use fractic_server_error::ServerError;

use crate::{
    config::DatabaseConfig,
    data::{
        datasources::pg_pool,
        repositories::{
            transactions_repository_impl::TransactionsRepositoryImpl,
            users_repository_impl::UsersRepositoryImpl,
        },
    },
    domain::usecases::{
        money_report_usecase::{MoneyReportUsecase, MoneyReportUsecaseImpl},
        user_lookup_usecase::{UserLookupUsecase, UserLookupUsecaseImpl},
    },
    entities::{BalanceSummary, User},
    presentation::{balance_table_printer::BalanceTablePrinter, command_loop::CommandLoop},
    repositories::{TransactionsRepository, UsersRepository},
};

pub type Report = String;

pub struct BalanceReportUtil {
    money_report_usecase: Box<dyn MoneyReportUsecase>,
    user_lookup_usecase: Box<dyn UserLookupUsecase>,
    printer: BalanceTablePrinter,
}

impl BalanceReportUtil {
    /// Connects to PostgreSQL and pings it once. Fails immediately if the
    /// database is unreachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ServerError> {
        let pool = pg_pool::connect(config).await?;
        Ok(Self::with_repositories(
            TransactionsRepositoryImpl::new(pool.clone(), config.query_timeout),
            UsersRepositoryImpl::new(pool, config.query_timeout),
        ))
    }

    pub fn with_repositories<T, U>(transactions_repository: T, users_repository: U) -> Self
    where
        T: TransactionsRepository + 'static,
        U: UsersRepository + 'static,
    {
        Self {
            money_report_usecase: Box::new(MoneyReportUsecaseImpl::new(transactions_repository)),
            user_lookup_usecase: Box::new(UserLookupUsecaseImpl::new(users_repository)),
            printer: BalanceTablePrinter::new(),
        }
    }

    /// Fetches all transactions, groups them by day and renders the balance
    /// table. Nothing is rendered if any timestamp fails to parse.
    pub async fn money_report(&self) -> Result<(BalanceSummary, Report), ServerError> {
        let summary = self.money_report_usecase.summarize().await?;
        let report = self.printer.print_table(&summary);
        Ok((summary, report))
    }

    pub async fn find_user(&self, email: &str) -> Result<Option<User>, ServerError> {
        self.user_lookup_usecase.find_by_email(email).await
    }

    /// Looks up the user behind `email`; an unknown email is an error.
    pub async fn user_activations(&self, email: &str) -> Result<User, ServerError> {
        self.user_lookup_usecase.get_by_email(email).await
    }

    /// Runs the interactive command prompt until `quit` or end of input.
    pub async fn run_interactive<R, W>(&self, input: R, output: W) -> Result<(), ServerError>
    where
        R: BufRead,
        W: Write,
    {
        CommandLoop::new(self, input, output).run().await
    }
}
