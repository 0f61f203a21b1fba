pub mod game_players;
pub mod games;
pub mod users;

pub use game_players::Entity as GamePlayers;
pub use game_players::Model as GamePlayer;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use users::Entity as Users;
pub use users::Model as User;
