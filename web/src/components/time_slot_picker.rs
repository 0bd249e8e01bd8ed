use leptos::prelude::*;

use shared_types::{BookingState, SlotAppearance, TimeSlot};

/// Grid of time-slot buttons. Unavailable slots are disabled controls, not
/// merely ignored taps; the selected slot is the one whose label matches the
/// state's chosen time.
#[component]
pub fn TimeSlotPicker(
    slots: Vec<TimeSlot>,
    state: Signal<BookingState>,
    on_slot_press: impl Fn(TimeSlot) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="time-slot-grid">
            {slots
                .into_iter()
                .map(|slot| {
                    let interactive = slot.is_available();
                    let label = slot.label.clone();
                    let appearance_slot = slot.clone();

                    view! {
                        <button
                            class=move || slot_class(state.get().slot_appearance(&appearance_slot))
                            disabled=!interactive
                            on:click=move |_| on_slot_press(slot.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

fn slot_class(appearance: SlotAppearance) -> &'static str {
    match appearance {
        SlotAppearance::Unavailable => "time-slot unavailable",
        SlotAppearance::Available => "time-slot available",
        SlotAppearance::Selected => "time-slot selected",
    }
}
