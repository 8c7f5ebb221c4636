pub mod authors;
pub mod posts;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::Config;

/// Create a SeaORM database connection pool from the configured `DATABASE_URL`.
pub async fn create_pool(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .sqlx_logging(false);

    Database::connect(options).await
}
