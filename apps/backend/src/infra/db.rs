use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbProfile};
use crate::error::AppError;

/// Open a connection pool for the given engine and profile.
/// This function does NOT run any migrations.
pub async fn connect_db(kind: DbKind, profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, profile)?;

    let mut opt = ConnectOptions::new(url);
    match kind {
        // every SQLite memory connection is its own database; pin the pool to one
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::Postgres => {
            opt.min_connections(1).max_connections(10);
        }
    }
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    Ok(conn)
}

/// Connect *and* bring the schema up to date. Single entrypoint used by the
/// server and by tests.
pub async fn bootstrap_db(
    kind: DbKind,
    profile: DbProfile,
) -> Result<DatabaseConnection, AppError> {
    info!(db_kind = ?kind, profile = ?profile, "bootstrap=start");

    let conn = connect_db(kind, profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;

    info!(db_kind = ?kind, "bootstrap=ready");
    Ok(conn)
}
