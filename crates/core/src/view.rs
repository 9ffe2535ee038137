//! Presentation-only helpers for dashboard rendering. Locale text, not a
//! contract other components depend on.

use chrono::NaiveDate;

use crate::models::slot::SlotStatus;

/// Human-readable status label.
pub fn status_label(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Available => "Available",
        SlotStatus::Booked => "Booked",
        SlotStatus::Past => "Past",
    }
}

/// Badge class pair used by the dashboard status chips.
pub fn status_color_class(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Available => "bg-green-100 text-green-800",
        SlotStatus::Booked => "bg-blue-100 text-blue-800",
        SlotStatus::Past => "bg-gray-100 text-gray-800",
    }
}

/// Formats a calendar date for display, e.g. "Jun 21, 2023".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
