use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use openslot_core::errors::SlotError;
use openslot_core::models::notification::Notification;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub id: Uuid,
    pub read: bool,
}

#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<Arc<ApiState>>,
    Path(owner_id): Path<Uuid>,
) -> Result<Json<NotificationListResponse>, AppError> {
    let rows = openslot_db::repositories::notification::get_notifications_by_owner_id(
        &state.db_pool,
        owner_id,
    )
    .await?;

    let notifications = rows
        .into_iter()
        .map(|row| row.into_core())
        .collect::<eyre::Result<Vec<Notification>>>()?;

    Ok(Json(NotificationListResponse { notifications }))
}

#[axum::debug_handler]
pub async fn mark_read(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MarkReadResponse>, AppError> {
    let updated =
        openslot_db::repositories::notification::mark_notification_read(&state.db_pool, id)
            .await?;

    if !updated {
        return Err(AppError(SlotError::NotFound(id)));
    }

    Ok(Json(MarkReadResponse { id, read: true }))
}
