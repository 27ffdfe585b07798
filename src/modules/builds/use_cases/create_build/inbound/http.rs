use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::builds::adapters::inbound::http_error::error_response;
use crate::modules::builds::core::build::Build;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Build>, JsonRejection>,
) -> impl IntoResponse {
    let Json(build) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if build.id.is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    match state.store.create(build.clone()).await {
        Ok(()) => (StatusCode::CREATED, Json(build)).into_response(),
        Err(e) => error_response(e),
    }
}
