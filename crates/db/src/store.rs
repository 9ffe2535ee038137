//! Adapters from the core collaborator traits onto the Postgres
//! repositories.

use async_trait::async_trait;
use eyre::Result;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use openslot_core::models::notification::NotificationKind;
use openslot_core::models::slot::{AvailabilitySlot, SlotStatus};
use openslot_core::notify::NotificationSink;
use openslot_core::store::SlotStore;

use crate::repositories;

/// Postgres-backed slot store.
#[derive(Clone)]
pub struct PgSlotStore {
    pool: PgPool,
}

impl PgSlotStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotStore for PgSlotStore {
    async fn fetch_slots(&self, owner_id: Uuid) -> Result<Vec<AvailabilitySlot>> {
        let rows = repositories::slot::get_slots_by_owner_id(&self.pool, owner_id).await?;
        rows.into_iter().map(|row| row.into_core()).collect()
    }

    async fn persist_slot(&self, slot: &AvailabilitySlot) -> Result<()> {
        repositories::slot::create_slot(&self.pool, slot).await?;
        Ok(())
    }

    async fn remove_slot(&self, id: Uuid) -> Result<()> {
        repositories::slot::delete_slot(&self.pool, id).await
    }

    async fn update_status(&self, id: Uuid, status: SlotStatus) -> Result<()> {
        repositories::slot::update_slot_status(&self.pool, id, status).await
    }
}

/// Postgres-backed notification sink for a single owner.
///
/// Inserts are spawned and not awaited; a failed insert is logged and
/// dropped, never surfaced to the calling operation.
#[derive(Clone)]
pub struct PgNotificationSink {
    pool: PgPool,
    owner_id: Uuid,
}

impl PgNotificationSink {
    pub fn new(pool: PgPool, owner_id: Uuid) -> Self {
        Self { pool, owner_id }
    }
}

impl NotificationSink for PgNotificationSink {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        let pool = self.pool.clone();
        let owner_id = self.owner_id;
        let title = title.to_string();
        let message = message.to_string();

        tokio::spawn(async move {
            if let Err(err) = repositories::notification::create_notification(
                &pool, owner_id, kind, &title, &message,
            )
            .await
            {
                warn!(
                    "Failed to record notification for owner {}: {}",
                    owner_id, err
                );
            }
        });
    }
}
