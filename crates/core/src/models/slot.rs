use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle stage of an availability slot. Exactly one is active per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Booked,
    Past,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Booked => "booked",
            SlotStatus::Past => "past",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(SlotStatus::Available),
            "booked" => Some(SlotStatus::Booked),
            "past" => Some(SlotStatus::Past),
            _ => None,
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single availability window an owner offers for booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: SlotStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AvailabilitySlot {
    /// A slot has elapsed once the wall clock reaches its date + end time.
    pub fn is_elapsed(&self, now: NaiveDateTime) -> bool {
        self.date.and_time(self.end_time) <= now
    }
}

/// Unvalidated slot candidate as submitted by the add form.
///
/// All scheduling fields are optional here; absence is reported as a
/// "required" validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Status filter applied to slot listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Booked,
    Past,
}

impl StatusFilter {
    pub fn matches(&self, status: SlotStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => status == SlotStatus::Available,
            StatusFilter::Booked => status == SlotStatus::Booked,
            StatusFilter::Past => status == SlotStatus::Past,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotListResponse {
    pub slots: Vec<AvailabilitySlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSlotResponse {
    pub id: Uuid,
}
