use axum::{Extension, Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

use crate::modules::builds::use_cases::create_build::inbound::http as create_http;
use crate::modules::builds::use_cases::delete_build::inbound::http as delete_http;
use crate::modules::builds::use_cases::patch_build::inbound::http as patch_http;
use crate::modules::builds::use_cases::read_build::inbound::http as read_http;
use crate::modules::builds::use_cases::replace_build::inbound::http as replace_http;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/builds", post(create_http::handle))
        .route(
            "/builds/{id}",
            get(read_http::handle)
                .put(replace_http::handle)
                .patch(patch_http::handle)
                .delete(delete_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
