use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::shared::infrastructure::build_store::BuildStoreError;

pub fn status_for(error: &BuildStoreError) -> StatusCode {
    match error {
        BuildStoreError::NotFound => StatusCode::NOT_FOUND,
        BuildStoreError::AlreadyExists => StatusCode::CONFLICT,
        BuildStoreError::InconsistentIds => StatusCode::BAD_REQUEST,
    }
}

pub fn error_response(error: BuildStoreError) -> Response {
    (
        status_for(&error),
        Json(json!({ "error": error.to_string() })),
    )
        .into_response()
}

#[cfg(test)]
mod build_http_error_tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(BuildStoreError::NotFound, StatusCode::NOT_FOUND)]
    #[case(BuildStoreError::AlreadyExists, StatusCode::CONFLICT)]
    #[case(BuildStoreError::InconsistentIds, StatusCode::BAD_REQUEST)]
    fn it_should_map_each_store_error_to_a_status(
        #[case] error: BuildStoreError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(status_for(&error), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_carry_the_error_message_in_the_body() {
        let response = error_response(BuildStoreError::InconsistentIds);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({ "error": "inconsistent IDs" }));
    }
}
