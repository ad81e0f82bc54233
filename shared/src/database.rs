use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use anyhow::Result;
use tracing::info;

pub async fn get_db_connection(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database via Sea-ORM at: {}", database_url);
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);
    let db = Database::connect(options).await?;
    Ok(db)
}
