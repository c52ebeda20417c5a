use dioxus::prelude::*;
use store::Event;

use crate::icons::FaArrowLeft;
use crate::Icon;

/// Summary card. Only past events are clickable.
#[component]
pub fn EventCard(event: Event, on_open: Option<EventHandler<Event>>) -> Element {
    let past = event.is_past();
    let card_class = if past { "event-card past" } else { "event-card upcoming" };
    let opened = event.clone();

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| {
                if let (true, Some(handler)) = (past, &on_open) {
                    handler.call(opened.clone());
                }
            },
            if let Some(hero) = &event.hero_image {
                img { class: "event-hero", src: "{hero}", alt: "{event.title}" }
            }
            span { class: "event-badge", "{event.status.label()}" }
            div { class: "event-date", "{event.date}" }
            h4 { "{event.title}" }
            p { "{event.short_desc()}" }
        }
    }
}

/// Full view of a past event.
#[component]
pub fn EventDetail(
    event: Event,
    on_back: EventHandler<()>,
    on_image: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "event-detail",
            button {
                class: "btn btn-outline back-button",
                onclick: move |_| on_back.call(()),
                Icon { width: 14, height: 14, icon: FaArrowLeft }
                " Back to Dashboard"
            }
            if let Some(hero) = event.hero_image.clone() {
                div {
                    class: "event-detail-hero",
                    title: "Click to view full screen",
                    onclick: {
                        let hero = hero.clone();
                        move |_| on_image.call(hero.clone())
                    },
                    img { src: "{hero}", alt: "{event.title}" }
                }
            }
            div {
                class: "event-detail-header",
                h2 { "{event.title}" }
                span { class: "event-detail-date", "{event.date}" }
            }
            div { class: "event-detail-body", "{event.body()}" }
            if !event.gallery.is_empty() {
                h3 { class: "event-highlights", "Event Highlights" }
                div {
                    class: "event-gallery",
                    for (index, url) in event.gallery.iter().cloned().enumerate() {
                        img {
                            key: "{index}",
                            src: "{url}",
                            alt: "Gallery {index + 1}",
                            onclick: move |_| on_image.call(url.clone()),
                        }
                    }
                }
            }
        }
    }
}
