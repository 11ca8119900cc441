use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{login, logout, session};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
}
