//! One `request_completed` event per request.
//!
//! Paths are logged as the matched route pattern (`/api/games/{game_id}`),
//! never with the raw query string, which carries user ids. Problem
//! responses add their `error_code`.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::error::AppError;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What gets recorded about a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Completion {
    method: String,
    route: String,
    status: StatusCode,
    error_code: Option<&'static str>,
    duration_us: u64,
    trace_id: String,
}

impl Completion {
    fn emit(&self) {
        let code = self.error_code.unwrap_or("-");
        let status = self.status.as_u16();
        if self.status.is_server_error() {
            error!(http.method=%self.method, http.route=%self.route, http.status_code=status, error_code=code, duration_us=self.duration_us, trace_id=%self.trace_id, message="request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method=%self.method, http.route=%self.route, http.status_code=status, error_code=code, duration_us=self.duration_us, trace_id=%self.trace_id, message="request_completed");
        } else {
            info!(http.method=%self.method, http.route=%self.route, http.status_code=status, duration_us=self.duration_us, trace_id=%self.trace_id, message="request_completed");
        }
    }
}

fn error_code(err: &ActixError) -> Option<&'static str> {
    err.as_error::<AppError>().map(|e| e.code().as_str())
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let route = req
            .match_pattern()
            .unwrap_or_else(|| "unmatched".to_string());
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, error_code) = match &result {
                Ok(res) => (res.status(), res.response().error().and_then(error_code)),
                Err(err) => (err.as_response_error().status_code(), error_code(err)),
            };

            Completion {
                method,
                route,
                status,
                error_code,
                duration_us: start.elapsed().as_micros() as u64,
                trace_id,
            }
            .emit();

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use super::*;
    use crate::errors::ErrorCode;

    #[::core::prelude::v1::test]
    fn error_code_is_read_from_app_errors_only() {
        let app_err: ActixError = AppError::not_found(ErrorCode::GameNotFound, "x").into();
        assert_eq!(error_code(&app_err), Some("GAME_NOT_FOUND"));

        let other: ActixError = actix_web::error::ErrorBadRequest("nope");
        assert_eq!(error_code(&other), None);
    }

    #[actix_web::test]
    async fn passes_responses_through() {
        let app = test::init_service(App::new().wrap(StructuredLogger).route(
            "/api/games/{game_id}",
            web::get().to(|| async {
                Err::<HttpResponse, _>(AppError::not_found(ErrorCode::GameNotFound, "missing"))
            }),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/api/games/g1?player_id=u1")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let err = resp.response().error().expect("error kept on response");
        assert_eq!(error_code(err), Some("GAME_NOT_FOUND"));
    }
}
