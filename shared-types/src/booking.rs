use crate::calendar::CalendarDate;
use crate::TimeSlot;

/// Everything the booking screen remembers: the highlighted calendar day and
/// the label of the chosen time slot, if any. State lives for one screen and
/// is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub selected_date: CalendarDate,
    pub selected_time: Option<String>,
}

impl BookingState {
    /// Initial state at screen mount: the current date, no time chosen.
    pub fn at(today: CalendarDate) -> Self {
        Self {
            selected_date: today,
            selected_time: None,
        }
    }

    /// Whether the calendar should highlight this date. Exactly one date
    /// satisfies this at any time.
    pub fn is_marked(&self, date: CalendarDate) -> bool {
        self.selected_date == date
    }

    pub fn slot_appearance(&self, slot: &TimeSlot) -> SlotAppearance {
        if !slot.is_available() {
            SlotAppearance::Unavailable
        } else if self.selected_time.as_deref() == Some(slot.label.as_str()) {
            SlotAppearance::Selected
        } else {
            SlotAppearance::Available
        }
    }
}

/// User input events the screen dispatches. Every state change goes through
/// `reduce`; the view never writes fields directly.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    SelectDate(CalendarDate),
    SelectTime(TimeSlot),
}

/// Visual state of one slot control. `Selected` wins over `Available` when
/// the slot's label matches the chosen time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAppearance {
    Unavailable,
    Available,
    Selected,
}

/// Pure state transition. Selecting a date replaces the previous one
/// unconditionally (the calendar already refuses days before the minimum);
/// selecting a time only applies to available slots, unavailable ones leave
/// the state untouched. Nothing ever clears `selected_time`.
pub fn reduce(state: &BookingState, action: BookingAction) -> BookingState {
    match action {
        BookingAction::SelectDate(date) => BookingState {
            selected_date: date,
            selected_time: state.selected_time.clone(),
        },
        BookingAction::SelectTime(slot) if slot.is_available() => BookingState {
            selected_date: state.selected_date,
            selected_time: Some(slot.label),
        },
        BookingAction::SelectTime(_) => state.clone(),
    }
}
