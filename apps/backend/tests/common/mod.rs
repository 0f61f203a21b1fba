#![allow(dead_code)]

// tests/common/mod.rs
use backend_test_support::unique_helpers::{unique_login, unique_str};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tictactoe_backend::config::db::{DbKind, DbProfile};
use tictactoe_backend::entities::games::GameStatus;
use tictactoe_backend::entities::{game_players, games, users};
use tictactoe_backend::infra::db::bootstrap_db;
use time::{Duration, OffsetDateTime};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh migrated in-memory database. Each call is an isolated store.
pub async fn test_db() -> DatabaseConnection {
    bootstrap_db(DbKind::SqliteMemory, DbProfile::Test)
        .await
        .expect("bootstrap in-memory test database")
}

pub const TEST_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$dGVzdGhhc2h0ZXN0aGFzaA";

pub async fn seed_user(conn: &DatabaseConnection, prefix: &str) -> users::Model {
    users::ActiveModel {
        id: Set(unique_str(prefix)),
        login: Set(unique_login(prefix)),
        password_hash: Set(TEST_PASSWORD_HASH.to_string()),
        rating: Set(1000),
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
    .expect("insert user")
}

/// Game row builder. Older games come first in store order.
pub struct GameSeed {
    pub id: String,
    pub status: GameStatus,
    pub field: Option<Value>,
    pub winner_id: Option<String>,
    pub age: Duration,
}

impl GameSeed {
    pub fn new(status: GameStatus) -> Self {
        Self {
            id: unique_str("game"),
            status,
            field: None,
            winner_id: None,
            age: Duration::ZERO,
        }
    }

    pub fn field(mut self, field: Value) -> Self {
        self.field = Some(field);
        self
    }

    pub fn winner(mut self, user_id: &str) -> Self {
        self.winner_id = Some(user_id.to_string());
        self
    }

    pub fn minutes_old(mut self, minutes: i64) -> Self {
        self.age = Duration::minutes(minutes);
        self
    }

    pub async fn insert(self, conn: &DatabaseConnection) -> games::Model {
        games::ActiveModel {
            id: Set(self.id),
            status: Set(self.status),
            field: Set(self.field),
            winner_id: Set(self.winner_id),
            created_at: Set(OffsetDateTime::now_utc() - self.age),
        }
        .insert(conn)
        .await
        .expect("insert game")
    }
}

pub async fn seat(conn: &DatabaseConnection, game_id: &str, user_id: &str, turn_order: i32) {
    game_players::ActiveModel {
        game_id: Set(game_id.to_string()),
        user_id: Set(user_id.to_string()),
        turn_order: Set(turn_order),
    }
    .insert(conn)
    .await
    .expect("insert seat");
}

pub fn empty_board() -> Value {
    serde_json::json!([null, null, null, null, null, null, null, null, null])
}
