use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::builds::adapters::inbound::http_error::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.store.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
