use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::{IntoResponse, Response},
};
use futures_util::stream::{self, Stream};
use storage::dto::result::{CreateResultRequest, ResultQueryParams, ResultResponse};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    params(ResultQueryParams),
    responses(
        (status = 200, description = "Results matching every active filter, newest first", body = Vec<ResultResponse>),
        (status = 400, description = "Unknown filter value")
    ),
    tag = "results"
)]
pub async fn list_results(
    State(state): State<AppState>,
    Query(params): Query<ResultQueryParams>,
) -> Result<Response, WebError> {
    let query = params.into_query().map_err(WebError::BadRequest)?;

    let results = services::list_results(state.store.as_ref(), &query);
    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/live",
    responses(
        (status = 200, description = "SSE stream emitting the full result collection on subscribe and after every mutation")
    ),
    tag = "results"
)]
pub async fn stream_results(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.store.subscribe();

    let stream = stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }

        let snapshot = rx.borrow_and_update().clone();
        let response: Vec<ResultResponse> = snapshot.iter().map(ResultResponse::from).collect();
        let json = serde_json::to_string(&response).unwrap_or_default();

        Some((Ok(Event::default().event("results").data(json)), (rx, false)))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result recorded successfully", body = ResultResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(state): State<AppState>,
    Json(req): Json<CreateResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let record = services::add_result(state.store.as_ref(), &req).await?;

    Ok((StatusCode::CREATED, Json(ResultResponse::from(record))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Result deleted; deleting an absent id is a no-op"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::remove_result(state.store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
