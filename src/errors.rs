use fractic_server_error::{define_client_error, define_internal_error};

// Database-related.
define_internal_error!(
    DatabaseConnectionFailed,
    "Could not connect to database '{database}' at {host}:{port}.",
    { database: &str, host: &str, port: u16 }
);
define_internal_error!(DatabaseQueryFailed, "Query '{query}' failed.", { query: &str });
define_internal_error!(
    DatabaseQueryTimedOut,
    "Query '{query}' did not complete within {seconds}s.",
    { query: &str, seconds: u64 }
);

// Parsing-related.
define_client_error!(
    InvalidTimestamp,
    "Invalid RFC 3339 timestamp: '{timestamp}'.",
    { timestamp: &str }
);

// Lookup-related.
define_client_error!(UserNotFound, "No user found with email '{email}'.", { email: &str });

// Reporting-related.
define_internal_error!(
    DayBucketMissing,
    "Day '{day}' is listed in the day order but has no bucket.",
    { day: &str }
);
define_internal_error!(
    BalanceOverflow,
    "Amounts for '{scope}' do not fit in 64 bits.",
    { scope: &str }
);

// Terminal-related.
define_internal_error!(TerminalIoFailed, "Error reading from or writing to the terminal.");
