use sea_orm::DatabaseConnection;

use crate::config::db::{DbKind, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db: Option<DbSource>,
}

enum DbSource {
    Bootstrap(DbKind, DbProfile),
    Existing(DatabaseConnection),
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect and migrate on `build()`.
    pub fn with_db(mut self, kind: DbKind, profile: DbProfile) -> Self {
        self.db = Some(DbSource::Bootstrap(kind, profile));
        self
    }

    /// Reuse a connection that is already migrated (e.g. seeded in a test).
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.db = Some(DbSource::Existing(conn));
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            Some(DbSource::Bootstrap(kind, profile)) => {
                let conn = bootstrap_db(kind, profile).await?;
                Ok(AppState::new(conn))
            }
            Some(DbSource::Existing(conn)) => Ok(AppState::new(conn)),
            None => Ok(AppState::without_db()),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn test_build_with_sqlite_memory() {
        let state = build_state()
            .with_db(DbKind::SqliteMemory, DbProfile::Test)
            .build()
            .await
            .unwrap();
        assert!(state.db().is_some());
    }
}
