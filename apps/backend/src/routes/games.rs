//! Read-only games API.

use actix_web::{web, HttpRequest};
use serde::Deserialize;
use tracing::debug;

use crate::adapters::games_sea::GameFilter;
use crate::db::require_db;
use crate::domain::GameEntity;
use crate::entities::games::GameStatus;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::repos::games as games_repo;
use crate::state::app_state::AppState;

/// Ids are generated strings; anything longer cannot exist in the store.
const MAX_GAME_ID_LEN: usize = 64;

#[derive(Debug, Default, Deserialize)]
pub struct ListGamesQuery {
    pub status: Option<GameStatus>,
    pub player_id: Option<String>,
    pub winner_id: Option<String>,
}

impl From<ListGamesQuery> for GameFilter {
    fn from(q: ListGamesQuery) -> Self {
        let mut filter = GameFilter::new();
        if let Some(status) = q.status {
            filter = filter.with_status(status);
        }
        if let Some(player_id) = q.player_id {
            filter = filter.with_participant(player_id);
        }
        if let Some(winner_id) = q.winner_id {
            filter = filter.with_winner(winner_id);
        }
        filter
    }
}

async fn list_games(
    query: web::Query<ListGamesQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<GameEntity>>, AppError> {
    let db = require_db(&app_state)?;
    let filter = GameFilter::from(query.into_inner());

    let games = games_repo::game_list(db, filter).await?;
    debug!(count = games.len(), "Listed games");

    Ok(web::Json(games))
}

async fn get_game(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameEntity>, AppError> {
    let game_id = path.into_inner();
    validate_game_id(&game_id)?;

    let db = require_db(&app_state)?;
    let game = games_repo::require_game(db, &game_id).await?;

    Ok(web::Json(game))
}

fn validate_game_id(game_id: &str) -> Result<(), DomainError> {
    if game_id.len() > MAX_GAME_ID_LEN || game_id.chars().any(char::is_whitespace) {
        return Err(DomainError::validation(
            ValidationKind::InvalidGameId,
            format!("Invalid game id: {game_id:?}"),
        ));
    }
    Ok(())
}

fn query_error(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::InvalidStatus, format!("Invalid query: {err}")).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .route("", web::get().to(list_games))
        .route("/{game_id}", web::get().to(get_game));
}
