use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use openslot_core::models::notification::NotificationKind;
use openslot_core::models::slot::{AvailabilitySlot, SlotStatus};
use openslot_core::notify::NotificationSink;
use openslot_core::store::SlotStore;

/// In-memory slot store standing in for Postgres in handler-level tests.
#[derive(Default)]
pub struct InMemorySlotStore {
    pub slots: Mutex<Vec<AvailabilitySlot>>,
    pub fail: AtomicBool,
}

impl InMemorySlotStore {
    pub fn seed(&self, slot: AvailabilitySlot) {
        self.slots.lock().unwrap().push(slot);
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> eyre::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(eyre::eyre!("store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl SlotStore for InMemorySlotStore {
    async fn fetch_slots(&self, owner_id: Uuid) -> eyre::Result<Vec<AvailabilitySlot>> {
        self.check()?;
        Ok(self
            .slots
            .lock()
            .unwrap()
            .iter()
            .filter(|slot| slot.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn persist_slot(&self, slot: &AvailabilitySlot) -> eyre::Result<()> {
        self.check()?;
        self.slots.lock().unwrap().push(slot.clone());
        Ok(())
    }

    async fn remove_slot(&self, id: Uuid) -> eyre::Result<()> {
        self.check()?;
        self.slots.lock().unwrap().retain(|slot| slot.id != id);
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: SlotStatus) -> eyre::Result<()> {
        self.check()?;
        for slot in self.slots.lock().unwrap().iter_mut() {
            if slot.id == id {
                slot.status = status;
            }
        }
        Ok(())
    }
}

/// Sink that records every notification it receives.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<(NotificationKind, String)>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, kind: NotificationKind, title: &str, _message: &str) {
        self.events.lock().unwrap().push((kind, title.to_string()));
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Fixed "now" used across handler tests: 2023-06-20 08:00.
pub fn now() -> NaiveDateTime {
    date(2023, 6, 20).and_time(time(8, 0))
}

pub fn slot_fixture(
    owner_id: Uuid,
    d: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    status: SlotStatus,
) -> AvailabilitySlot {
    AvailabilitySlot {
        id: Uuid::new_v4(),
        owner_id,
        date: d,
        start_time: start,
        end_time: end,
        status,
        notes: None,
        created_at: Utc::now(),
    }
}

/// Reads a response body into JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}
