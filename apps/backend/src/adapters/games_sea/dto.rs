//! DTOs for games_sea adapter.

use crate::entities::{games, users};

/// A game row with its eagerly loaded relations, exactly as stored.
///
/// `players` is ordered by `game_players.turn_order`. User rows still carry
/// their password hash; only the repos layer turns them into entities.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWithRelations {
    pub game: games::Model,
    pub players: Vec<users::Model>,
    pub winner: Option<users::Model>,
}

impl GameWithRelations {
    pub fn new(game: games::Model) -> Self {
        Self {
            game,
            players: Vec::new(),
            winner: None,
        }
    }

    pub fn with_players(mut self, players: Vec<users::Model>) -> Self {
        self.players = players;
        self
    }

    pub fn with_winner(mut self, winner: users::Model) -> Self {
        self.winner = Some(winner);
        self
    }
}
