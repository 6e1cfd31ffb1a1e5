// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod pg_pool;
        pub(crate) mod transactions_pg_datasource;
        pub(crate) mod users_pg_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod transaction_row_model;
        pub(crate) mod user_row_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod transactions_repository_impl;
        pub(crate) mod users_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod balance_summary;
        pub(crate) mod day_buckets;
        pub(crate) mod day_key;
        pub(crate) mod transaction;
        pub(crate) mod user;
    }
    pub(crate) mod logic {
        pub(crate) mod balance_summarizer;
        pub(crate) mod day_aggregator;
    }
    pub(crate) mod repositories {
        pub(crate) mod transactions_repository;
        pub(crate) mod users_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod money_report_usecase;
        pub(crate) mod user_lookup_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod balance_table_printer;
    pub(crate) mod command_loop;
    pub(crate) mod user_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::balance_summary::*;
        pub use crate::domain::entities::day_buckets::*;
        pub use crate::domain::entities::day_key::*;
        pub use crate::domain::entities::transaction::*;
        pub use crate::domain::entities::user::*;
    }

    pub mod logic {
        pub use crate::domain::logic::balance_summarizer::*;
        pub use crate::domain::logic::day_aggregator::*;
    }

    pub mod repositories {
        pub use crate::domain::repositories::transactions_repository::*;
        pub use crate::domain::repositories::users_repository::*;
    }

    pub mod formatting {
        pub use crate::presentation::balance_table_printer::*;
        pub use crate::presentation::utils::format_minor_units;
    }
}
