use async_trait::async_trait;
use eyre::Result;
use uuid::Uuid;

use crate::models::slot::{AvailabilitySlot, SlotStatus};

/// Persistence collaborator for availability slots.
///
/// The manager treats its in-session collection as the source of truth and
/// surfaces store failures to the caller without rolling back.
#[async_trait]
pub trait SlotStore: Send + Sync {
    async fn fetch_slots(&self, owner_id: Uuid) -> Result<Vec<AvailabilitySlot>>;

    async fn persist_slot(&self, slot: &AvailabilitySlot) -> Result<()>;

    async fn remove_slot(&self, id: Uuid) -> Result<()>;

    async fn update_status(&self, id: Uuid, status: SlotStatus) -> Result<()>;
}
