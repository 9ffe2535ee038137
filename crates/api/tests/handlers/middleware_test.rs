use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use openslot_api::middleware::error_handling::AppError;
use openslot_core::errors::{MSG_REQUIRED, SlotError, SlotFieldErrors};
use openslot_core::models::slot::SlotStatus;

use crate::test_utils::body_json;

#[tokio::test]
async fn test_validation_error_response() {
    let err = SlotError::Validation(SlotFieldErrors {
        date: Some(MSG_REQUIRED),
        start_time: Some(MSG_REQUIRED),
        end_time: None,
    });

    let response = AppError(err).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["fields"]["date"], "required");
    assert_eq!(body["fields"]["start_time"], "required");
    assert!(body["fields"].get("end_time").is_none());
    assert!(body["error"].as_str().unwrap().contains("Validation"));
}

#[tokio::test]
async fn test_not_found_response() {
    let id = Uuid::new_v4();
    let response = AppError(SlotError::NotFound(id)).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains(&id.to_string()));
}

#[tokio::test]
async fn test_invalid_state_response() {
    let response = AppError(SlotError::InvalidState {
        id: Uuid::new_v4(),
        status: SlotStatus::Past,
    })
    .into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("past"));
}

#[tokio::test]
async fn test_persistence_error_response() {
    let response =
        AppError(SlotError::Persistence(eyre::eyre!("connection refused"))).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_report_conversion() {
    let err: AppError = eyre::eyre!("store offline").into();
    assert!(matches!(err.0, SlotError::Persistence(_)));
}
