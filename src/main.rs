use std::{io, process::ExitCode, time::Duration};

use balance_report::{config::DatabaseConfig, util::BalanceReportUtil};
use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "balance-report",
    version,
    about = "Daily balance report and user lookup over the transactions database"
)]
struct Cli {
    /// Database host
    #[arg(long, env = "DB_HOST")]
    db_host: String,

    /// Database user
    #[arg(long, env = "DB_USERNAME")]
    db_username: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    db_password: String,

    /// Database name
    #[arg(long, env = "DB_DATABASE")]
    db_database: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    db_port: u16,

    /// Upper bound for connecting and for each query, in seconds
    #[arg(long, env = "DB_QUERY_TIMEOUT_SECS", default_value_t = 30)]
    query_timeout_secs: u64,
}

impl Cli {
    fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(
            &self.db_host,
            &self.db_username,
            &self.db_password,
            &self.db_database,
            self.db_port,
        )
        .with_query_timeout(Duration::from_secs(self.query_timeout_secs))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => debug!("no .env file found"),
        Err(e) => warn!("ignoring unreadable .env file: {}", e),
    }

    let cli = Cli::parse();
    let config = cli.database_config();
    debug!(?config, "starting");

    let util = match BalanceReportUtil::connect(&config).await {
        Ok(util) => util,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match util.run_interactive(io::stdin().lock(), io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
