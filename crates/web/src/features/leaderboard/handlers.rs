use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Json,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream};
use storage::models::GroupScore;
use storage::services::scoreboard;

use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Per-group standings, leader first; always exactly three entries", body = Vec<GroupScore>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Json<Vec<GroupScore>> {
    Json(services::standings(state.store.as_ref()))
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/live",
    responses(
        (status = 200, description = "SSE stream of the standings, re-emitted after every mutation")
    ),
    tag = "leaderboard"
)]
pub async fn stream_leaderboard(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.store.subscribe();

    let stream = stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }

        let snapshot = rx.borrow_and_update().clone();
        let standings = scoreboard::aggregate(&snapshot);
        let json = serde_json::to_string(&standings).unwrap_or_default();

        Some((Ok(Event::default().event("standings").data(json)), (rx, false)))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
