use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. Used by `main.rs` and by tests that build an `App`
/// directly; middleware is wired by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Games read API: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
