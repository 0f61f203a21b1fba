// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::http::StatusCode;
use actix_web::ResponseError;

use crate::domain::field::Field;
use crate::errors::domain::{
    DomainError, InfraErrorKind, IntegrityKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn malformed_field_is_a_server_side_record_problem() {
    let de: DomainError = Field::parse(Some(&serde_json::json!([1, 2, 3])))
        .unwrap_err()
        .into();
    assert!(matches!(
        de,
        DomainError::Validation(ValidationKind::MalformedField, _)
    ));

    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::MalformedField);
    assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn maps_request_validation() {
    let app: AppError =
        DomainError::validation(ValidationKind::InvalidStatus, "status 'paused'").into();
    assert_eq!(app.code(), ErrorCode::InvalidStatus);
    assert_eq!(app.status().as_u16(), 400);

    let app: AppError =
        DomainError::validation(ValidationKind::Other("x".into()), "bad input").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_integrity_to_data_corruption() {
    for kind in [IntegrityKind::MissingCreator, IntegrityKind::MissingWinner] {
        let app: AppError = DomainError::integrity(kind, "broken").into();
        assert_eq!(app.code(), ErrorCode::DataCorruption);
        assert_eq!(app.status().as_u16(), 500);
    }
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Other("Record".into()), "x").into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "other").into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn every_code_has_a_mapping_path() {
    // Each AppError variant reachable from a DomainError keeps its own code
    let codes: Vec<ErrorCode> = [
        DomainError::validation(ValidationKind::InvalidGameId, "x"),
        DomainError::validation(ValidationKind::InvalidStatus, "x"),
        DomainError::validation(ValidationKind::Other("x".into()), "x"),
        DomainError::validation(ValidationKind::MalformedField, "x"),
        DomainError::integrity(IntegrityKind::MissingCreator, "x"),
        DomainError::not_found(NotFoundKind::Game, "x"),
        DomainError::not_found(NotFoundKind::User, "x"),
        DomainError::not_found(NotFoundKind::Other("x".into()), "x"),
        DomainError::infra(InfraErrorKind::Timeout, "x"),
        DomainError::infra(InfraErrorKind::DbUnavailable, "x"),
        DomainError::infra(InfraErrorKind::Other("x".into()), "x"),
    ]
    .into_iter()
    .map(|de| AppError::from(de).code())
    .collect();

    assert_eq!(
        codes,
        vec![
            ErrorCode::InvalidGameId,
            ErrorCode::InvalidStatus,
            ErrorCode::ValidationError,
            ErrorCode::MalformedField,
            ErrorCode::DataCorruption,
            ErrorCode::GameNotFound,
            ErrorCode::UserNotFound,
            ErrorCode::NotFound,
            ErrorCode::DbTimeout,
            ErrorCode::DbUnavailable,
            ErrorCode::InternalError,
        ]
    );
    assert_eq!(AppError::config("x").code(), ErrorCode::ConfigError);
}

#[actix_web::test]
async fn problem_response_carries_code_and_trace_header() {
    let resp = AppError::not_found(ErrorCode::GameNotFound, "Game g9 not found").error_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/problem+json"
    );
    assert!(resp.headers().contains_key("x-trace-id"));

    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "GAME_NOT_FOUND");
    assert_eq!(json["title"], "Game Not Found");
    assert_eq!(json["status"], 404);
    assert_eq!(json["trace_id"], "unknown");
}
