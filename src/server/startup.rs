use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Deletes revocation entries whose tokens have expired anyway.
///
/// Run once at startup so the revocation list does not grow without bound across
/// restarts. Failure is logged and ignored.
pub async fn purge_expired_tokens(db: &sea_orm::DatabaseConnection) {
    use crate::server::data::revoked_token::RevokedTokenRepository;

    match RevokedTokenRepository::new(db)
        .purge_expired(chrono::Utc::now())
        .await
    {
        Ok(0) => {}
        Ok(purged) => tracing::info!("Purged {} expired revoked tokens", purged),
        Err(e) => tracing::warn!("Failed to purge expired revoked tokens: {}", e),
    }
}
