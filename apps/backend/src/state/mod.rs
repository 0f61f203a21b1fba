pub mod app_state;

pub use crate::infra::state::build_state;
pub use app_state::AppState;
