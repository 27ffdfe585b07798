use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::builds::adapters::inbound::http_error::error_response;
use crate::modules::builds::core::build::Build;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Build>, JsonRejection>,
) -> impl IntoResponse {
    let Json(build) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.store.replace(&id, build).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
