//! Game repository functions for domain layer.
//!
//! Reads game rows with their relations through the SeaORM adapter and maps
//! each row into the status-tagged [`GameEntity`].

use sea_orm::{Condition, ConnectionTrait};
use tracing::error;

use crate::adapters::games_sea::{self as games_adapter, GameFilter, GameWithRelations};
use crate::domain::{Field, GameEntity, GameIdleEntity, GameInProgressEntity, GameOverEntity};
use crate::entities::games::GameStatus;
use crate::errors::domain::{DomainError, IntegrityKind, NotFoundKind};
use crate::repos::users::remove_password;

/// List games matching `filter`, in store order (`created_at`, then `id`).
///
/// Fails on the first record that cannot be mapped; no partial result is
/// returned.
pub async fn game_list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: impl Into<Condition>,
) -> Result<Vec<GameEntity>, DomainError> {
    let rows = games_adapter::find_with_relations(conn, filter.into()).await?;
    rows.into_iter().map(db_game_to_game_entity).collect()
}

pub async fn find_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<GameEntity>, DomainError> {
    let mut games = game_list(conn, GameFilter::by_id(game_id)).await?;
    Ok(games.pop())
}

/// Like [`find_game`], with a missing game reported as `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<GameEntity, DomainError> {
    find_game(conn, game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}

/// Map one loaded game row into its domain entity.
pub fn db_game_to_game_entity(row: GameWithRelations) -> Result<GameEntity, DomainError> {
    let GameWithRelations {
        game,
        players,
        winner,
    } = row;
    let id = game.id;

    match game.status {
        GameStatus::Idle => {
            let creator = players.into_iter().next().ok_or_else(|| {
                error!(game_id = %id, "Idle game has no players");
                DomainError::integrity(
                    IntegrityKind::MissingCreator,
                    format!("Idle game {id} has no creator"),
                )
            })?;
            Ok(GameEntity::Idle(GameIdleEntity {
                id,
                creator: remove_password(creator),
            }))
        }
        GameStatus::InProgress | GameStatus::GameOverDraw => {
            let field = parse_field(&id, game.field.as_ref())?;
            let body = GameInProgressEntity {
                id,
                players: players.into_iter().map(remove_password).collect(),
                field,
            };
            if game.status == GameStatus::InProgress {
                Ok(GameEntity::InProgress(body))
            } else {
                Ok(GameEntity::GameOverDraw(body))
            }
        }
        GameStatus::GameOver => {
            let field = parse_field(&id, game.field.as_ref())?;
            let winner = winner.ok_or_else(|| {
                error!(game_id = %id, winner_id = ?game.winner_id, "Finished game has no winner");
                DomainError::integrity(
                    IntegrityKind::MissingWinner,
                    format!("Game {id} is over but has no winner"),
                )
            })?;
            Ok(GameEntity::GameOver(GameOverEntity {
                id,
                players: players.into_iter().map(remove_password).collect(),
                field,
                winner: remove_password(winner),
            }))
        }
    }
}

fn parse_field(game_id: &str, value: Option<&serde_json::Value>) -> Result<Field, DomainError> {
    Field::parse(value).map_err(|e| {
        error!(game_id = %game_id, error = %e, "Stored game field is malformed");
        DomainError::from(e)
    })
}
