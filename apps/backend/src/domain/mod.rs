//! Game read model returned by the repository layer.
//!
//! Pure types: no HTTP and no database access. Everything here is built fresh
//! per read and serialised as-is by the API layer.

pub mod field;
pub mod game;
pub mod player;

pub use field::{Field, FieldError};
pub use game::{GameEntity, GameIdleEntity, GameInProgressEntity, GameOverEntity};
pub use player::PlayerEntity;
