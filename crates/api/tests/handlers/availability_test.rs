use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use openslot_api::middleware::error_handling::AppError;
use openslot_core::clock::FixedClock;
use openslot_core::manager::AvailabilityManager;
use openslot_core::models::slot::{CreateSlotRequest, SlotStatus, StatusFilter};

use crate::test_utils::{
    InMemorySlotStore, RecordingSink, body_json, date, now, slot_fixture, time,
};

async fn load_manager(
    store: Arc<InMemorySlotStore>,
    owner_id: Uuid,
) -> AvailabilityManager {
    AvailabilityManager::load(
        owner_id,
        store,
        Arc::new(RecordingSink::default()),
        Arc::new(FixedClock(now())),
    )
    .await
    .expect("load should succeed")
}

// Mirrors the list handler: sweep expired statuses, then project.
#[tokio::test]
async fn test_list_flow_sweeps_and_sorts() {
    let owner_id = Uuid::new_v4();
    let store = Arc::new(InMemorySlotStore::default());

    // Seeded out of chronological order; the first one ended yesterday.
    store.seed(slot_fixture(
        owner_id,
        date(2023, 6, 19),
        time(9, 0),
        time(10, 0),
        SlotStatus::Available,
    ));
    store.seed(slot_fixture(
        owner_id,
        date(2023, 6, 22),
        time(9, 0),
        time(10, 0),
        SlotStatus::Available,
    ));
    store.seed(slot_fixture(
        owner_id,
        date(2023, 6, 21),
        time(9, 0),
        time(10, 0),
        SlotStatus::Booked,
    ));

    let mut manager = load_manager(store, owner_id).await;
    manager.sweep_expired().await.unwrap();

    let all: Vec<_> = manager.list_slots(StatusFilter::All).collect();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, date(2023, 6, 19));
    assert_eq!(all[0].status, SlotStatus::Past);
    assert_eq!(all[1].date, date(2023, 6, 21));
    assert_eq!(all[2].date, date(2023, 6, 22));

    let past: Vec<_> = manager.list_slots(StatusFilter::Past).collect();
    assert_eq!(past.len(), 1);
}

#[tokio::test]
async fn test_create_validation_maps_to_bad_request() {
    let owner_id = Uuid::new_v4();
    let store = Arc::new(InMemorySlotStore::default());
    let mut manager = load_manager(store, owner_id).await;

    // End before start, as a client form would submit it.
    let err = manager
        .add_slot(CreateSlotRequest {
            date: Some(date(2023, 6, 20)),
            start_time: Some(time(12, 0)),
            end_time: Some(time(9, 0)),
            notes: None,
        })
        .await
        .unwrap_err();

    let response = AppError(err).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["fields"]["end_time"], "must be after start time");
    assert!(body["fields"].get("date").is_none());
}

#[tokio::test]
async fn test_create_persists_through_store() {
    let owner_id = Uuid::new_v4();
    let store = Arc::new(InMemorySlotStore::default());
    let mut manager = load_manager(store.clone(), owner_id).await;

    let slot = manager
        .add_slot(CreateSlotRequest {
            date: Some(date(2023, 6, 21)),
            start_time: Some(time(9, 0)),
            end_time: Some(time(12, 0)),
            notes: Some("Final-round interviews".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(slot.status, SlotStatus::Available);
    assert_eq!(slot.owner_id, owner_id);
    let stored = store.slots.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, slot.id);
}

#[tokio::test]
async fn test_delete_booked_maps_to_conflict() {
    let owner_id = Uuid::new_v4();
    let store = Arc::new(InMemorySlotStore::default());
    let booked = slot_fixture(
        owner_id,
        date(2023, 6, 21),
        time(9, 0),
        time(10, 0),
        SlotStatus::Booked,
    );
    store.seed(booked.clone());

    let mut manager = load_manager(store, owner_id).await;
    let err = manager.delete_slot(booked.id).await.unwrap_err();

    let response = AppError(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_missing_maps_to_not_found() {
    let owner_id = Uuid::new_v4();
    let store = Arc::new(InMemorySlotStore::default());
    let mut manager = load_manager(store, owner_id).await;

    let err = manager.delete_slot(Uuid::new_v4()).await.unwrap_err();

    let response = AppError(err).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_book_flow_transitions_status() {
    let owner_id = Uuid::new_v4();
    let store = Arc::new(InMemorySlotStore::default());
    let open = slot_fixture(
        owner_id,
        date(2023, 6, 21),
        time(9, 0),
        time(10, 0),
        SlotStatus::Available,
    );
    store.seed(open.clone());

    let mut manager = load_manager(store.clone(), owner_id).await;
    manager.mark_booked(open.id).await.unwrap();

    assert_eq!(store.slots.lock().unwrap()[0].status, SlotStatus::Booked);

    // A second booking event for the same slot is rejected.
    let err = manager.mark_booked(open.id).await.unwrap_err();
    let response = AppError(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_store_failure_maps_to_internal_error() {
    let owner_id = Uuid::new_v4();
    let store = Arc::new(InMemorySlotStore::default());
    let mut manager = load_manager(store.clone(), owner_id).await;
    store.set_fail(true);

    let err = manager
        .add_slot(CreateSlotRequest {
            date: Some(date(2023, 6, 21)),
            start_time: Some(time(9, 0)),
            end_time: Some(time(10, 0)),
            notes: None,
        })
        .await
        .unwrap_err();

    let response = AppError(err).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
