use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Persisted game status. String values match the API's `status` tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[sea_orm(string_value = "idle")]
    Idle,
    #[sea_orm(string_value = "inProgress")]
    InProgress,
    #[sea_orm(string_value = "gameOverDraw")]
    GameOverDraw,
    #[sea_orm(string_value = "gameOver")]
    GameOver,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub status: GameStatus,
    /// Board cells as JSON; shape is checked on read, not on write.
    #[sea_orm(column_type = "Json", nullable)]
    pub field: Option<Json>,
    #[sea_orm(column_name = "winner_id")]
    pub winner_id: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::WinnerId",
        to = "super::users::Column::Id"
    )]
    Winner,
    #[sea_orm(has_many = "super::game_players::Entity")]
    GamePlayers,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Winner.def()
    }
}

impl Related<super::game_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePlayers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
