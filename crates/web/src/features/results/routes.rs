use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{create_result, delete_result, list_results, stream_results};
use crate::middleware::auth::{Sessions, require_auth};
use crate::state::AppState;

pub fn routes(sessions: Sessions) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_result))
        .route("/:id", delete(delete_result))
        .route_layer(middleware::from_fn_with_state(sessions, require_auth));

    Router::new()
        .route("/", get(list_results))
        .route("/live", get(stream_results))
        .merge(protected)
}
