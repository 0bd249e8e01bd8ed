use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use shared_types::{Availability, CalendarDate, TimeSlot};

use crate::views::booking::BookingScreen;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        // sets the document title
        <Title text="Appointment Booking"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=BookingPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

/// The single screen of the application. The slot list and the confirm
/// handler are injected here; the screen itself carries no configuration.
#[component]
fn BookingPage() -> impl IntoView {
    view! {
        <BookingScreen
            slots=available_times()
            on_confirm={move |date: CalendarDate, time: Option<String>| {
                leptos::logging::log!(
                    "confirm schedule requested: {} / {}",
                    date,
                    time.as_deref().unwrap_or("no time chosen")
                );
            }}
        />
    }
}

/// Demo schedule. A real deployment would fetch this from its scheduling
/// backend; the screen only ever sees the list.
fn available_times() -> Vec<TimeSlot> {
    [
        (1, "07:00 PM", Availability::Available),
        (2, "07:15 PM", Availability::Unavailable),
        (3, "07:30 PM", Availability::Available),
        (4, "08:30 PM", Availability::Unavailable),
        (5, "08:45 PM", Availability::Available),
        (6, "09:00 PM", Availability::Available),
    ]
    .into_iter()
    .map(|(id, label, availability)| TimeSlot {
        id,
        label: label.to_string(),
        availability,
    })
    .collect()
}
