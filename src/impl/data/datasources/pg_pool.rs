use std::{fmt::Debug, future::Future, time::Duration};

use fractic_server_error::ServerError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{info, instrument};

use crate::{
    config::DatabaseConfig,
    errors::{DatabaseConnectionFailed, DatabaseQueryFailed, DatabaseQueryTimedOut},
};

fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.database)
        .options([("TimeZone", "UTC")])
}

/// Opens a single-connection pool and pings the server once. Any failure
/// here is fatal to the caller; there is no retry.
#[instrument(skip(config), fields(host = %config.host, port = config.port, database = %config.database))]
pub(crate) async fn connect(config: &DatabaseConfig) -> Result<PgPool, ServerError> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.query_timeout)
        .connect_with(connect_options(config))
        .await
        .map_err(|e| connection_failed(config, &e))?;
    match tokio::time::timeout(config.query_timeout, sqlx::query("SELECT 1").execute(&pool)).await
    {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => return Err(connection_failed(config, &e)),
        Err(elapsed) => return Err(connection_failed(config, &elapsed)),
    }

    info!("connected to database");
    Ok(pool)
}

fn connection_failed<E: Debug>(config: &DatabaseConfig, cause: &E) -> ServerError {
    DatabaseConnectionFailed::with_debug(&config.database, &config.host, config.port, cause)
}

/// Runs a query future, bounding it by `timeout`.
pub(crate) async fn with_timeout<T, F>(
    query: &str,
    timeout: Duration,
    fut: F,
) -> Result<T, ServerError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(|e| DatabaseQueryFailed::with_debug(query, &e)),
        Err(elapsed) => Err(DatabaseQueryTimedOut::with_debug(
            query,
            timeout.as_secs(),
            &elapsed,
        )),
    }
}
