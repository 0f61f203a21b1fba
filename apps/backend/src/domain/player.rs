use serde::Serialize;

/// A user as exposed in game entities. There is deliberately no password
/// field; see `repos::users::remove_password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntity {
    pub id: String,
    pub login: String,
    pub rating: i32,
}
