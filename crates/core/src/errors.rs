use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::slot::SlotStatus;

pub const MSG_REQUIRED: &str = "required";
pub const MSG_DATE_IN_PAST: &str = "must not be in the past";
pub const MSG_END_NOT_AFTER_START: &str = "must be after start time";

/// Field-level validation messages for a rejected slot candidate.
///
/// One optional message per known field; every rule is evaluated
/// independently so the caller can display all failures at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlotFieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<&'static str>,
}

impl SlotFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.start_time.is_none() && self.end_time.is_none()
    }
}

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Validation failed for one or more fields")]
    Validation(SlotFieldErrors),

    #[error("Slot not found: {0}")]
    NotFound(Uuid),

    #[error("Slot {id} is {status} and cannot be modified")]
    InvalidState { id: Uuid, status: SlotStatus },

    #[error("Persistence error: {0}")]
    Persistence(#[from] eyre::Report),
}

pub type SlotResult<T> = Result<T, SlotError>;
