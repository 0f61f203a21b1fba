use serde::Serialize;

use super::field::Field;
use super::player::PlayerEntity;
use crate::entities::games::GameStatus;

/// A game awaiting its second player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameIdleEntity {
    pub id: String,
    pub creator: PlayerEntity,
}

/// A game being played, or one that ended in a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInProgressEntity {
    pub id: String,
    pub players: Vec<PlayerEntity>,
    pub field: Field,
}

/// A game decided in favour of `winner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOverEntity {
    pub id: String,
    pub players: Vec<PlayerEntity>,
    pub field: Field,
    pub winner: PlayerEntity,
}

/// Game read model, one variant per persisted status.
///
/// Serialises with a `status` tag carrying the same string values the
/// database stores, e.g. `{"status":"idle","id":"g1","creator":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GameEntity {
    Idle(GameIdleEntity),
    InProgress(GameInProgressEntity),
    GameOverDraw(GameInProgressEntity),
    GameOver(GameOverEntity),
}

impl GameEntity {
    pub fn id(&self) -> &str {
        match self {
            GameEntity::Idle(g) => &g.id,
            GameEntity::InProgress(g) | GameEntity::GameOverDraw(g) => &g.id,
            GameEntity::GameOver(g) => &g.id,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self {
            GameEntity::Idle(_) => GameStatus::Idle,
            GameEntity::InProgress(_) => GameStatus::InProgress,
            GameEntity::GameOverDraw(_) => GameStatus::GameOverDraw,
            GameEntity::GameOver(_) => GameStatus::GameOver,
        }
    }

    /// Everyone seated in the game. For an idle game that is the creator.
    pub fn players(&self) -> Vec<&PlayerEntity> {
        match self {
            GameEntity::Idle(g) => vec![&g.creator],
            GameEntity::InProgress(g) | GameEntity::GameOverDraw(g) => g.players.iter().collect(),
            GameEntity::GameOver(g) => g.players.iter().collect(),
        }
    }

    pub fn winner(&self) -> Option<&PlayerEntity> {
        match self {
            GameEntity::GameOver(g) => Some(&g.winner),
            _ => None,
        }
    }
}
