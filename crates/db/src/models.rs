use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use openslot_core::models::notification::{Notification, NotificationKind};
use openslot_core::models::slot::{AvailabilitySlot, SlotStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailabilitySlot {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbAvailabilitySlot {
    /// Converts a row into the domain model, rejecting unknown status text.
    pub fn into_core(self) -> Result<AvailabilitySlot> {
        let status = SlotStatus::parse(&self.status)
            .ok_or_else(|| eyre!("Unknown slot status in database: {}", self.status))?;

        Ok(AvailabilitySlot {
            id: self.id,
            owner_id: self.owner_id,
            date: self.slot_date,
            start_time: self.start_time,
            end_time: self.end_time,
            status,
            notes: self.notes,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbNotification {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl DbNotification {
    pub fn into_core(self) -> Result<Notification> {
        let kind = NotificationKind::parse(&self.kind)
            .ok_or_else(|| eyre!("Unknown notification kind in database: {}", self.kind))?;

        Ok(Notification {
            id: self.id,
            owner_id: self.owner_id,
            kind,
            title: self.title,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        })
    }
}
