use dioxus::prelude::*;
use store::validate::validate_event;
use store::{Event, EventDraft, EventStatus, ImageUpload};

use crate::components::{read_uploads, Button, ButtonVariant, ConfirmDialog, Field};
use crate::icons::{FaPen, FaTrash};
use crate::{use_site_data, Icon};

fn draft_of(event: &Event) -> EventDraft {
    EventDraft {
        title: event.title.clone(),
        date: event.date.clone(),
        description: event.description.clone().unwrap_or_default(),
        full_description: event.full_description.clone().unwrap_or_default(),
        status: event.status,
        hero_image: event.hero_image.clone(),
        gallery: event.gallery.clone(),
    }
}

#[component]
pub(super) fn EventsTab() -> Element {
    let data = use_site_data();
    let mut editing = use_signal(|| None::<String>);
    let mut draft = use_signal(EventDraft::default);
    let mut hero = use_signal(|| None::<ImageUpload>);
    let mut gallery = use_signal(Vec::<ImageUpload>::new);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<Event>);
    // Bumped after a save so the file inputs remount empty.
    let mut form_key = use_signal(|| 0u32);

    let mut reset = move || {
        editing.set(None);
        draft.set(EventDraft::default());
        hero.set(None);
        gallery.set(Vec::new());
        form_key += 1;
    };

    let save = move |_: MouseEvent| {
        let current = draft();
        if let Err(e) = validate_event(&current) {
            data.reject(&e.to_string());
            return;
        }
        saving.set(true);
        spawn(async move {
            if data.save_event(editing(), current, hero(), gallery()).await {
                reset();
            }
            saving.set(false);
        });
    };

    let events = data.events.read().clone();
    let heading = if editing().is_some() { "Edit Event" } else { "Add New Event" };

    rsx! {
        div {
            class: "admin-panel",
            h3 { "{heading}" }
            div {
                key: "{form_key}",
                class: "admin-form",
                Field {
                    label: "Title",
                    input {
                        value: "{draft.read().title}",
                        oninput: move |evt| draft.write().title = evt.value(),
                    }
                }
                Field {
                    label: "Date",
                    input {
                        placeholder: "e.g. 17 September 2025",
                        value: "{draft.read().date}",
                        oninput: move |evt| draft.write().date = evt.value(),
                    }
                }
                Field {
                    label: "Status",
                    select {
                        value: "{draft.read().status.as_str()}",
                        onchange: move |evt| {
                            draft.write().status = EventStatus::from_stored(&evt.value());
                        },
                        option { value: "upcoming", "Upcoming" }
                        option { value: "past", "Past" }
                    }
                }
                Field {
                    label: "Short Description",
                    textarea {
                        rows: "2",
                        value: "{draft.read().description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }
                Field {
                    label: "Full Description",
                    textarea {
                        rows: "5",
                        value: "{draft.read().full_description}",
                        oninput: move |evt| draft.write().full_description = evt.value(),
                    }
                }
                Field {
                    label: "Hero Image",
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt| async move {
                            hero.set(read_uploads(evt).await.into_iter().next());
                        },
                    }
                }
                Field {
                    label: "Gallery Images",
                    input {
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        onchange: move |evt| async move {
                            gallery.set(read_uploads(evt).await);
                        },
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        disabled: saving(),
                        onclick: save,
                        if saving() { "Saving..." } else if editing().is_some() { "Update Event" } else { "Add Event" }
                    }
                    if editing().is_some() {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| reset(),
                            "Cancel"
                        }
                    }
                }
            }

            h3 { "Existing Events" }
            ul {
                class: "admin-list",
                for event in events {
                    li {
                        key: "{event.id}",
                        span { class: "admin-list-title", "{event.title}" }
                        span { class: "admin-list-meta", "{event.date} · {event.status.label()}" }
                        button {
                            class: "icon-button",
                            aria_label: "Edit",
                            onclick: {
                                let event = event.clone();
                                move |_| {
                                    editing.set(Some(event.id.clone()));
                                    draft.set(draft_of(&event));
                                    hero.set(None);
                                    gallery.set(Vec::new());
                                }
                            },
                            Icon { width: 14, height: 14, icon: FaPen }
                        }
                        button {
                            class: "icon-button danger",
                            aria_label: "Delete",
                            onclick: {
                                let event = event.clone();
                                move |_| pending_delete.set(Some(event.clone()))
                            },
                            Icon { width: 14, height: 14, icon: FaTrash }
                        }
                    }
                }
            }

            if let Some(event) = pending_delete() {
                ConfirmDialog {
                    message: "Are you sure?",
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        let id = event.id.clone();
                        spawn(async move {
                            if data.delete_event(id.clone()).await && editing() == Some(id) {
                                reset();
                            }
                        });
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_keeps_existing_images() {
        let event = Event {
            id: "e1".into(),
            title: "Fest".into(),
            date: "1 March".into(),
            description: None,
            full_description: Some("Long".into()),
            hero_image: Some("/uploads/events/1-hero-a.jpg".into()),
            gallery: vec!["/uploads/events/1-gallery-0-b.jpg".into()],
            status: EventStatus::Past,
        };
        let draft = draft_of(&event);
        assert_eq!(draft.description, "");
        assert_eq!(draft.hero_image, event.hero_image);
        assert_eq!(draft.gallery, event.gallery);
        assert_eq!(draft.status, EventStatus::Past);
    }
}
