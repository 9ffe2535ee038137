//! Domain core for the openslot availability service.
//!
//! Owns the slot data model, the validation and lifecycle rules enforced by
//! [`manager::AvailabilityManager`], and the collaborator traits
//! ([`store::SlotStore`], [`notify::NotificationSink`], [`clock::Clock`])
//! that the outer layers implement.

pub mod clock;
pub mod errors;
pub mod manager;
pub mod models;
pub mod notify;
pub mod store;
pub mod view;
