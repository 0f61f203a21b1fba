//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repositories convert it here into
//! `crate::errors::domain::DomainError`, and higher layers map `DomainError`
//! to `AppError` via `From`. Raw driver messages are only ever logged, and
//! only through the PII redactor.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        // a stored value the model cannot decode, e.g. an unknown status string
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } | sea_orm::DbErr::Json(_) => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Undecodable database value");
            return DomainError::infra(
                InfraErrorKind::DataCorruption,
                "Stored record could not be decoded",
            );
        }
        _ => {}
    }

    let lowered = error_msg.to_lowercase();
    if lowered.contains("timeout") || lowered.contains("timed out") || lowered.contains("pool") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, RuntimeErr};

    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let de = map_db_err(DbErr::RecordNotFound("games".into()));
        assert!(matches!(de, DomainError::NotFound(NotFoundKind::Other(_), _)));
    }

    #[test]
    fn connection_errors_map_to_unavailable() {
        let de = map_db_err(DbErr::Conn(RuntimeErr::Internal("connection refused".into())));
        assert_eq!(
            de,
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        );
    }

    #[test]
    fn undecodable_values_map_to_data_corruption() {
        let de = map_db_err(DbErr::Type("unexpected value for GameStatus enum: paused".into()));
        assert!(matches!(
            de,
            DomainError::Infra(InfraErrorKind::DataCorruption, _)
        ));
    }

    #[test]
    fn timeouts_map_to_timeout() {
        let de = map_db_err(DbErr::Query(RuntimeErr::Internal(
            "canceling statement due to statement timeout".into(),
        )));
        assert_eq!(de, DomainError::infra(InfraErrorKind::Timeout, "Database timeout"));
    }

    #[test]
    fn detail_never_echoes_raw_message() {
        let de = map_db_err(DbErr::Custom("secret $2b$12$abcdefghijklmnopqrstuv".into()));
        match de {
            DomainError::Infra(InfraErrorKind::Other(_), detail) => {
                assert_eq!(detail, "Database operation failed");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
