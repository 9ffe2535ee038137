//! # Availability Handlers
//!
//! Handlers for the availability dashboard: listing slots, adding new
//! availability, deleting unbooked slots, and applying booking events
//! signaled by the external booking flow.
//!
//! Each handler loads an [`AvailabilityManager`] for the requested owner,
//! runs one operation against it, and returns the result. The store is the
//! source of truth between requests; the manager is the per-request
//! session. The list handler runs the expiry sweep before projecting so
//! `past` statuses are current at read time.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use openslot_core::errors::SlotError;
use openslot_core::manager::AvailabilityManager;
use openslot_core::models::slot::{
    AvailabilitySlot, CreateSlotRequest, DeleteSlotResponse, SlotListResponse, StatusFilter,
};
use openslot_db::store::{PgNotificationSink, PgSlotStore};

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the slot listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListSlotsQuery {
    /// Status filter; omitted means every slot is returned
    pub status: Option<StatusFilter>,
}

async fn load_manager(
    state: &ApiState,
    owner_id: Uuid,
) -> Result<AvailabilityManager, AppError> {
    let store = Arc::new(PgSlotStore::new(state.db_pool.clone()));
    let notifier = Arc::new(PgNotificationSink::new(state.db_pool.clone(), owner_id));
    let manager =
        AvailabilityManager::load(owner_id, store, notifier, state.clock.clone()).await?;
    Ok(manager)
}

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Path(owner_id): Path<Uuid>,
    Query(query): Query<ListSlotsQuery>,
) -> Result<Json<SlotListResponse>, AppError> {
    let mut manager = load_manager(&state, owner_id).await?;

    // Apply the wall-clock transition before projecting.
    manager.sweep_expired().await?;

    let filter = query.status.unwrap_or_default();
    let slots = manager.list_slots(filter).cloned().collect();

    Ok(Json(SlotListResponse { slots }))
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Path(owner_id): Path<Uuid>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<(StatusCode, Json<AvailabilitySlot>), AppError> {
    let mut manager = load_manager(&state, owner_id).await?;

    let slot = manager.add_slot(payload).await?;

    Ok((StatusCode::CREATED, Json(slot)))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    Path((owner_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<DeleteSlotResponse>, AppError> {
    let mut manager = load_manager(&state, owner_id).await?;

    manager.delete_slot(id).await?;

    Ok(Json(DeleteSlotResponse { id }))
}

/// Applies a booking event from the external booking flow.
#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path((owner_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AvailabilitySlot>, AppError> {
    let mut manager = load_manager(&state, owner_id).await?;

    manager.mark_booked(id).await?;

    let slot = manager
        .slots()
        .iter()
        .find(|slot| slot.id == id)
        .cloned()
        .ok_or(AppError(SlotError::NotFound(id)))?;

    Ok(Json(slot))
}
