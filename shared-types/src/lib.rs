use serde::{Deserialize, Serialize};

pub mod booking;
pub mod calendar;

pub use booking::{reduce, BookingAction, BookingState, SlotAppearance};
pub use calendar::{CalendarDate, DateParseError, YearMonth};

/// Whether a time slot can currently be booked.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

/// One bookable time option. The slot list is immutable configuration
/// supplied by the caller; ids are unique within a list, labels are the
/// human-readable times shown on the buttons.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimeSlot {
    pub id: i32,
    pub label: String,
    pub availability: Availability,
}

impl TimeSlot {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}
