//! Typed filter over game columns.

use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, Condition};

use crate::entities::games::{self, GameStatus};
use crate::entities::game_players;

/// Builder for the common game lookups. Criteria are AND-ed; repeated
/// statuses are OR-ed. The empty filter matches every game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    id: Option<String>,
    statuses: Vec<GameStatus>,
    participant: Option<String>,
    winner: Option<String>,
}

impl GameFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new().with_id(id)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        if !self.statuses.contains(&status) {
            self.statuses.push(status);
        }
        self
    }

    /// Games the user is seated in, whatever the turn order.
    pub fn with_participant(mut self, user_id: impl Into<String>) -> Self {
        self.participant = Some(user_id.into());
        self
    }

    pub fn with_winner(mut self, user_id: impl Into<String>) -> Self {
        self.winner = Some(user_id.into());
        self
    }
}

impl From<GameFilter> for Condition {
    fn from(filter: GameFilter) -> Self {
        let mut cond = Condition::all();

        if let Some(id) = filter.id {
            cond = cond.add(games::Column::Id.eq(id));
        }
        if !filter.statuses.is_empty() {
            cond = cond.add(games::Column::Status.is_in(filter.statuses));
        }
        if let Some(user_id) = filter.participant {
            cond = cond.add(
                games::Column::Id.in_subquery(
                    Query::select()
                        .column(game_players::Column::GameId)
                        .from(game_players::Entity)
                        .and_where(game_players::Column::UserId.eq(user_id))
                        .to_owned(),
                ),
            );
        }
        if let Some(user_id) = filter.winner {
            cond = cond.add(games::Column::WinnerId.eq(user_id));
        }

        cond
    }
}
