use mockall::mock;
use uuid::Uuid;

use openslot_core::models::notification::NotificationKind;
use openslot_core::models::slot::{AvailabilitySlot, SlotStatus};

use crate::models::{DbAvailabilitySlot, DbNotification};

// Mock repositories for testing
mock! {
    pub SlotRepo {
        pub async fn create_slot(
            &self,
            slot: AvailabilitySlot,
        ) -> eyre::Result<DbAvailabilitySlot>;

        pub async fn get_slots_by_owner_id(
            &self,
            owner_id: Uuid,
        ) -> eyre::Result<Vec<DbAvailabilitySlot>>;

        pub async fn get_slot_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAvailabilitySlot>>;

        pub async fn update_slot_status(
            &self,
            id: Uuid,
            status: SlotStatus,
        ) -> eyre::Result<()>;

        pub async fn delete_slot(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub NotificationRepo {
        pub async fn create_notification(
            &self,
            owner_id: Uuid,
            kind: NotificationKind,
            title: &'static str,
            message: &'static str,
        ) -> eyre::Result<DbNotification>;

        pub async fn get_notifications_by_owner_id(
            &self,
            owner_id: Uuid,
        ) -> eyre::Result<Vec<DbNotification>>;

        pub async fn mark_notification_read(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}
