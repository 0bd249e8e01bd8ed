use leptos::prelude::*;
use thaw::*;

use shared_types::{CalendarDate, YearMonth};

/// Month-grid date picker. Shows one month at a time; days before
/// `min_date` render disabled, the day equal to `selected` is highlighted.
/// Backward navigation stops at the month of `min_date` since every earlier
/// cell would be disabled anyway.
#[component]
pub fn BookingCalendar(
    min_date: CalendarDate,
    selected: Signal<CalendarDate>,
    on_day_press: impl Fn(CalendarDate) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let month_cursor = RwSignal::new(YearMonth::of(min_date));
    let at_min_month = Signal::derive(move || month_cursor.get() == YearMonth::of(min_date));

    view! {
        <div class="booking-calendar">
            <div class="calendar-header">
                <Button
                    class="calendar-nav-button"
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| month_cursor.update(|m| *m = m.prev())
                    disabled=at_min_month
                >
                    "←"
                </Button>

                <div class="month-label">{move || month_cursor.get().to_string()}</div>

                <Button
                    class="calendar-nav-button"
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| month_cursor.update(|m| *m = m.next())
                >
                    "→"
                </Button>
            </div>

            <div class="weekday-headers">
                <div class="weekday-header">"Sun"</div>
                <div class="weekday-header">"Mon"</div>
                <div class="weekday-header">"Tue"</div>
                <div class="weekday-header">"Wed"</div>
                <div class="weekday-header">"Thu"</div>
                <div class="weekday-header">"Fri"</div>
                <div class="weekday-header">"Sat"</div>
            </div>

            <div class="calendar-days">
                {move || {
                    let current = selected.get();

                    month_cursor
                        .get()
                        .day_cells()
                        .into_iter()
                        .map(|cell| match cell {
                            Some(date) => {
                                let selectable = date >= min_date;
                                let is_selected = date == current;

                                view! {
                                    <button
                                        class="calendar-day"
                                        class:selected=is_selected
                                        class:past=!selectable
                                        disabled=!selectable
                                        on:click=move |_| {
                                            if selectable {
                                                on_day_press(date);
                                            }
                                        }
                                    >
                                        {date.day}
                                    </button>
                                }
                                .into_any()
                            }
                            None => view! { <div class="calendar-day empty"></div> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
