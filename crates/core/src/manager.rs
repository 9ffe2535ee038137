//! Availability slot lifecycle management.
//!
//! [`AvailabilityManager`] owns the slot collection for a single owner and
//! is the only place slots are created, deleted, or moved through their
//! status lifecycle. Reads go through sorted projections; writes validate
//! first, mutate the local collection, then push the change to the store.
//!
//! Store failures do not roll the local mutation back: the in-session
//! collection stays the source of truth and the error is surfaced as
//! [`SlotError::Persistence`] alongside an error notification.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::clock::Clock;
use crate::errors::{
    MSG_DATE_IN_PAST, MSG_END_NOT_AFTER_START, MSG_REQUIRED, SlotError, SlotFieldErrors,
    SlotResult,
};
use crate::models::notification::NotificationKind;
use crate::models::slot::{AvailabilitySlot, CreateSlotRequest, SlotStatus, StatusFilter};
use crate::notify::NotificationSink;
use crate::store::SlotStore;

/// Validates a slot candidate against `today`.
///
/// Every rule is evaluated in a fixed order and all applicable messages are
/// accumulated; nothing short-circuits after the first failure. On success
/// the present-by-construction fields are returned unwrapped.
pub fn validate_slot(
    request: &CreateSlotRequest,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveTime, NaiveTime), SlotFieldErrors> {
    let mut errors = SlotFieldErrors::default();

    match request.date {
        None => errors.date = Some(MSG_REQUIRED),
        Some(date) if date < today => errors.date = Some(MSG_DATE_IN_PAST),
        Some(_) => {}
    }

    if request.start_time.is_none() {
        errors.start_time = Some(MSG_REQUIRED);
    }

    match (request.start_time, request.end_time) {
        (_, None) => errors.end_time = Some(MSG_REQUIRED),
        (Some(start), Some(end)) if end <= start => {
            errors.end_time = Some(MSG_END_NOT_AFTER_START)
        }
        _ => {}
    }

    match (request.date, request.start_time, request.end_time) {
        (Some(date), Some(start), Some(end)) if errors.is_empty() => Ok((date, start, end)),
        _ => Err(errors),
    }
}

/// Owns and mutates the availability slots of a single owner.
pub struct AvailabilityManager {
    owner_id: Uuid,
    store: Arc<dyn SlotStore>,
    notifier: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
    slots: Vec<AvailabilitySlot>,
    filter: StatusFilter,
    selected: Option<Uuid>,
}

impl std::fmt::Debug for AvailabilityManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityManager")
            .field("owner_id", &self.owner_id)
            .field("slots", &self.slots)
            .field("filter", &self.filter)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl AvailabilityManager {
    /// Creates a manager with an empty collection, without touching the store.
    pub fn new(
        owner_id: Uuid,
        store: Arc<dyn SlotStore>,
        notifier: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            owner_id,
            store,
            notifier,
            clock,
            slots: Vec::new(),
            filter: StatusFilter::default(),
            selected: None,
        }
    }

    /// Loads the owner's slots from the store.
    pub async fn load(
        owner_id: Uuid,
        store: Arc<dyn SlotStore>,
        notifier: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
    ) -> SlotResult<Self> {
        let slots = store.fetch_slots(owner_id).await?;
        debug!("Loaded {} slot(s) for owner {}", slots.len(), owner_id);

        let mut manager = Self::new(owner_id, store, notifier, clock);
        manager.slots = slots;
        Ok(manager)
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    /// The collection in insertion order, unfiltered.
    pub fn slots(&self) -> &[AvailabilitySlot] {
        &self.slots
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Slots matching `filter`, ascending by `(date, start_time)`.
    ///
    /// The sort is stable, so slots sharing a date and start time keep
    /// their insertion order. Restartable and side-effect free.
    pub fn list_slots(&self, filter: StatusFilter) -> impl Iterator<Item = &AvailabilitySlot> + '_ {
        let mut view: Vec<&AvailabilitySlot> = self
            .slots
            .iter()
            .filter(|slot| filter.matches(slot.status))
            .collect();
        view.sort_by_key(|slot| (slot.date, slot.start_time));
        view.into_iter()
    }

    /// Validates and appends a new `Available` slot.
    ///
    /// On validation failure the full per-field error set is returned and
    /// nothing is mutated. Overlapping slots are accepted; only per-slot
    /// rules are checked here.
    pub async fn add_slot(&mut self, request: CreateSlotRequest) -> SlotResult<AvailabilitySlot> {
        let (date, start_time, end_time) = match validate_slot(&request, self.clock.today()) {
            Ok(fields) => fields,
            Err(errors) => return Err(SlotError::Validation(errors)),
        };

        let slot = AvailabilitySlot {
            id: Uuid::new_v4(),
            owner_id: self.owner_id,
            date,
            start_time,
            end_time,
            status: SlotStatus::Available,
            notes: request.notes,
            created_at: Utc::now(),
        };

        self.slots.push(slot.clone());
        debug!("Added slot {} on {} for owner {}", slot.id, slot.date, self.owner_id);

        if let Err(err) = self.store.persist_slot(&slot).await {
            warn!("Failed to persist slot {}: {}", slot.id, err);
            self.notifier.notify(
                NotificationKind::Error,
                "Availability not saved",
                "The new availability slot could not be saved and is kept for this session only.",
            );
            return Err(SlotError::Persistence(err));
        }

        self.notifier.notify(
            NotificationKind::Success,
            "Availability added",
            &format!(
                "Added availability on {} from {} to {}",
                slot.date, slot.start_time, slot.end_time
            ),
        );

        Ok(slot)
    }

    /// Removes an `Available` slot.
    ///
    /// `Booked` and `Past` slots are never deletable; the check is enforced
    /// here even though callers are expected not to offer the action.
    pub async fn delete_slot(&mut self, id: Uuid) -> SlotResult<()> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.id == id)
            .ok_or(SlotError::NotFound(id))?;

        let status = self.slots[index].status;
        if status != SlotStatus::Available {
            return Err(SlotError::InvalidState { id, status });
        }

        let slot = self.slots.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!("Deleted slot {} for owner {}", id, self.owner_id);

        if let Err(err) = self.store.remove_slot(id).await {
            warn!("Failed to remove slot {} from store: {}", id, err);
            self.notifier.notify(
                NotificationKind::Error,
                "Availability not removed",
                "The slot was removed for this session but the change could not be saved.",
            );
            return Err(SlotError::Persistence(err));
        }

        self.notifier.notify(
            NotificationKind::Success,
            "Availability deleted",
            &format!("Removed availability on {}", slot.date),
        );

        Ok(())
    }

    /// Applies an externally-signaled booking event: `Available` -> `Booked`.
    pub async fn mark_booked(&mut self, id: Uuid) -> SlotResult<()> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or(SlotError::NotFound(id))?;

        if slot.status != SlotStatus::Available {
            return Err(SlotError::InvalidState { id, status: slot.status });
        }

        slot.status = SlotStatus::Booked;
        let date = slot.date;
        debug!("Slot {} booked for owner {}", id, self.owner_id);

        if let Err(err) = self.store.update_status(id, SlotStatus::Booked).await {
            warn!("Failed to persist booking of slot {}: {}", id, err);
            return Err(SlotError::Persistence(err));
        }

        self.notifier.notify(
            NotificationKind::Info,
            "Slot booked",
            &format!("Your availability on {} has been booked", date),
        );

        Ok(())
    }

    /// Moves every slot whose end has passed into `Past`.
    ///
    /// Returns how many slots changed status.
    pub async fn sweep_expired(&mut self) -> SlotResult<usize> {
        let now = self.clock.now();
        let mut expired = Vec::new();
        for slot in &mut self.slots {
            if slot.status != SlotStatus::Past && slot.is_elapsed(now) {
                slot.status = SlotStatus::Past;
                expired.push(slot.id);
            }
        }

        for id in &expired {
            if let Err(err) = self.store.update_status(*id, SlotStatus::Past).await {
                warn!("Failed to persist expiry of slot {}: {}", id, err);
                return Err(SlotError::Persistence(err));
            }
        }

        if !expired.is_empty() {
            debug!(
                "Marked {} slot(s) as past for owner {}",
                expired.len(),
                self.owner_id
            );
        }

        Ok(expired.len())
    }

    /// Selects a slot for the detail/delete-confirmation flow.
    pub fn select_slot(&mut self, id: Uuid) -> SlotResult<()> {
        if !self.slots.iter().any(|slot| slot.id == id) {
            return Err(SlotError::NotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&AvailabilitySlot> {
        self.selected
            .and_then(|id| self.slots.iter().find(|slot| slot.id == id))
    }
}
