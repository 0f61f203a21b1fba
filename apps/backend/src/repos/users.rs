//! User repository functions for domain layer.

use crate::domain::player::PlayerEntity;
use crate::entities::users;

/// Drop the credential columns of a user row.
///
/// `PlayerEntity` has no password field, so nothing downstream of this call
/// can leak the hash.
pub fn remove_password(user: users::Model) -> PlayerEntity {
    PlayerEntity {
        id: user.id,
        login: user.login,
        rating: user.rating,
    }
}

impl From<users::Model> for PlayerEntity {
    fn from(user: users::Model) -> Self {
        remove_password(user)
    }
}
