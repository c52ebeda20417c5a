use dioxus::prelude::*;
use store::models::partition_events;
use store::Event;

use crate::components::{EventCard, EventDetail};
use crate::use_site_data;

/// Past and upcoming events side by side. Opening a past event swaps the
/// dashboard for its detail view.
#[component]
pub fn EventsSection(on_image: EventHandler<String>) -> Element {
    let data = use_site_data();
    let mut selected = use_signal(|| None::<Event>);

    if let Some(event) = selected() {
        return rsx! {
            section {
                id: "events",
                class: "section",
                EventDetail {
                    event,
                    on_back: move |_| selected.set(None),
                    on_image: move |url| on_image.call(url),
                }
            }
        };
    }

    let (past, upcoming) = partition_events(&data.events.read());

    rsx! {
        section {
            id: "events",
            class: "section",
            h2 { "Events Dashboard" }
            div {
                class: "events-columns",
                div {
                    class: "events-column",
                    h3 {
                        "Past Events "
                        span { class: "events-hint", "(Click cards for details)" }
                    }
                    for event in past {
                        EventCard {
                            key: "{event.id}",
                            event,
                            on_open: move |event| selected.set(Some(event)),
                        }
                    }
                }
                div {
                    class: "events-column",
                    h3 { "Upcoming Events" }
                    for event in upcoming {
                        EventCard { key: "{event.id}", event }
                    }
                }
            }
        }
    }
}
