use leptos::prelude::*;
use thaw::*;

use chrono::Datelike;
use shared_types::{reduce, BookingAction, BookingState, CalendarDate, TimeSlot};

use crate::components::{BookingCalendar, TimeSlotPicker};

/// The booking screen: a month calendar, the time-slot grid and a confirm
/// button, all reading one `BookingState` signal. Every mutation is a
/// dispatched `BookingAction` run through the pure reducer, so the screen
/// itself holds no logic worth testing in a browser.
#[component]
pub fn BookingScreen(
    slots: Vec<TimeSlot>,
    on_confirm: impl Fn(CalendarDate, Option<String>) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let today = today();
    let state = RwSignal::new(BookingState::at(today));
    let dispatch = move |action: BookingAction| state.update(|s| *s = reduce(s, action));

    let selected_date = Signal::derive(move || state.get().selected_date);

    view! {
        <div class="booking-screen">
            <h1 class="booking-title">"Appointment Booking"</h1>

            <div class="booking-wrapper">
                <BookingCalendar
                    min_date=today
                    selected=selected_date
                    on_day_press=move |day| dispatch(BookingAction::SelectDate(day))
                />

                <h2 class="section-title">"Available Time"</h2>

                <TimeSlotPicker
                    slots=slots
                    state=state.into()
                    on_slot_press=move |slot| dispatch(BookingAction::SelectTime(slot))
                />

                <Button
                    class="confirm-schedule-button"
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        let current = state.get();
                        on_confirm(current.selected_date, current.selected_time);
                    }
                >
                    "Confirm Schedule"
                </Button>
            </div>
        </div>
    }
}

/// Mount-time current date, in the user's local timezone.
fn today() -> CalendarDate {
    let now = chrono::Local::now().date_naive();
    CalendarDate {
        year: now.year(),
        month: now.month(),
        day: now.day(),
    }
}
