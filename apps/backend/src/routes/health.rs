//! `GET /health`: liveness plus a database round trip.
//!
//! Answers 200 with `status: "ok"` when the store answers a ping, and 503 with
//! `status: "degraded"` otherwise. The body has the same shape either way so
//! health checks can read `db_error` and `migrations`.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::db::require_db;
use crate::logging::pii::redact;
use crate::state::app_state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Overall {
    Ok,
    Degraded,
}

#[derive(Debug, PartialEq, Eq)]
struct DbCheck {
    error: Option<String>,
    migrations: String,
}

impl DbCheck {
    fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            migrations: "unknown".to_string(),
        }
    }

    fn overall(&self) -> Overall {
        if self.error.is_none() {
            Overall::Ok
        } else {
            Overall::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: Overall,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

async fn ping(db: &DatabaseConnection) -> DbCheck {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1 AS health_check");
    if let Err(e) = db.query_one(ping).await {
        return DbCheck::failed(format!("DB query failed: {}", redact(&e.to_string())));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };
    DbCheck {
        error: None,
        migrations,
    }
}

async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let check = match require_db(&app_state) {
        Ok(db) => ping(db).await,
        Err(e) => DbCheck::failed(e.to_string()),
    };

    let status = check.overall();
    if let Some(error) = &check.error {
        warn!(db_error = %error, "Health check degraded");
    }

    let body = HealthResponse {
        status,
        app_version: env!("CARGO_PKG_VERSION"),
        db: if status == Overall::Ok { "ok" } else { "error" },
        db_error: check.error,
        migrations: check.migrations,
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    };

    let code = match status {
        Overall::Ok => StatusCode::OK,
        Overall::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };
    HttpResponse::build(code).json(body)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
