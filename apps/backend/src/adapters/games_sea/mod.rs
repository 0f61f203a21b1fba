//! SeaORM adapter for game reads - generic over ConnectionTrait.

use std::collections::HashMap;

use sea_orm::sea_query::{Query, SelectStatement};
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{game_players, games, users};

pub mod dto;
pub mod filter;

pub use dto::GameWithRelations;
pub use filter::GameFilter;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Find games matching `condition` with their players and winner loaded.
///
/// Rows come back ordered by `created_at`, then `id`. Players of each game are
/// ordered by `turn_order`. At most three queries are issued; the relation
/// queries are skipped when nothing matches. Relations are selected through
/// `condition` again as a subquery, so the number of bound parameters does
/// not grow with the number of matching games.
pub async fn find_with_relations<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    condition: Condition,
) -> Result<Vec<GameWithRelations>, sea_orm::DbErr> {
    let rows = games::Entity::find()
        .filter(condition.clone())
        .order_by_asc(games::Column::CreatedAt)
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut players =
        find_players_for(conn, matching_games(games::Column::Id, condition.clone())).await?;

    let winners = if rows.iter().any(|g| g.winner_id.is_some()) {
        find_users_in(conn, matching_games(games::Column::WinnerId, condition)).await?
    } else {
        HashMap::new()
    };

    Ok(rows
        .into_iter()
        .map(|game| {
            let seated = players.remove(&game.id).unwrap_or_default();
            let winner = game
                .winner_id
                .as_ref()
                .and_then(|id| winners.get(id).cloned());
            GameWithRelations {
                game,
                players: seated,
                winner,
            }
        })
        .collect())
}

/// `SELECT <column> FROM games WHERE <condition>`
fn matching_games(column: games::Column, condition: Condition) -> SelectStatement {
    Query::select()
        .column(column)
        .from(games::Entity)
        .cond_where(condition)
        .to_owned()
}

/// Users seated in the selected games, grouped by game id in turn order.
///
/// A seat whose user row is gone is skipped; the FK cascade makes that
/// unreachable on a consistent store.
async fn find_players_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_ids: SelectStatement,
) -> Result<HashMap<String, Vec<users::Model>>, sea_orm::DbErr> {
    let seats = game_players::Entity::find()
        .filter(game_players::Column::GameId.in_subquery(game_ids))
        .order_by_asc(game_players::Column::GameId)
        .order_by_asc(game_players::Column::TurnOrder)
        .find_also_related(users::Entity)
        .all(conn)
        .await?;

    let mut grouped: HashMap<String, Vec<users::Model>> = HashMap::new();
    for (seat, user) in seats {
        if let Some(user) = user {
            grouped.entry(seat.game_id).or_default().push(user);
        }
    }
    Ok(grouped)
}

async fn find_users_in<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_ids: SelectStatement,
) -> Result<HashMap<String, users::Model>, sea_orm::DbErr> {
    let found = users::Entity::find()
        .filter(users::Column::Id.in_subquery(user_ids))
        .all(conn)
        .await?;

    Ok(found.into_iter().map(|u| (u.id.clone(), u)).collect())
}
