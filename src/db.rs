use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use crate::config::Config;

pub type DbPool = AnyPool;

/// Connects eagerly so a bad DSN or unreachable server fails at startup.
pub async fn init_db(config: &Config) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
}
