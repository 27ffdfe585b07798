use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::builds::adapters::inbound::http_error::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.store.read(&id).await {
        Ok(build) => Json(build).into_response(),
        Err(e) => error_response(e),
    }
}
