mod alias;
mod error;
mod migrate;

pub use alias::rewrite_alias;
pub use error::MigrateError;
pub use migrate::migrate_legacy_queries;
