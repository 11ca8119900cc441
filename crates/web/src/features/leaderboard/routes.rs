use axum::{Router, routing::get};

use super::handlers::{get_leaderboard, stream_leaderboard};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/live", get(stream_leaderboard))
}
