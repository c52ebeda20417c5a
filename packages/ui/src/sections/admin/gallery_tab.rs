use dioxus::prelude::*;
use store::{GalleryImage, ImageUpload, ValidationError};

use crate::components::{read_uploads, Button, ConfirmDialog, Field};
use crate::icons::FaTrash;
use crate::{use_site_data, Icon};

#[component]
pub(super) fn GalleryTab() -> Element {
    let data = use_site_data();
    let mut file = use_signal(|| None::<ImageUpload>);
    let mut alt = use_signal(String::new);
    let mut uploading = use_signal(|| false);
    let mut pending_delete = use_signal(|| None::<GalleryImage>);
    let mut form_key = use_signal(|| 0u32);

    let upload = move |_: MouseEvent| {
        let Some(image) = file() else {
            data.reject(&ValidationError::ImageMissing.to_string());
            return;
        };
        uploading.set(true);
        spawn(async move {
            let alt_text = Some(alt()).filter(|a| !a.trim().is_empty());
            if data.add_gallery_image(image, alt_text).await {
                file.set(None);
                alt.set(String::new());
                form_key += 1;
            }
            uploading.set(false);
        });
    };

    let images = data.gallery.read().clone();

    rsx! {
        div {
            class: "admin-panel",
            h3 { "Add to Gallery" }
            div {
                key: "{form_key}",
                class: "admin-form",
                Field {
                    label: "Image",
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt| async move {
                            file.set(read_uploads(evt).await.into_iter().next());
                        },
                    }
                }
                Field {
                    label: "Caption",
                    input {
                        placeholder: "Optional description",
                        value: "{alt}",
                        oninput: move |evt| alt.set(evt.value()),
                    }
                }
                Button {
                    disabled: uploading(),
                    onclick: upload,
                    if uploading() { "Uploading..." } else { "Upload" }
                }
            }

            div {
                class: "gallery-grid admin-gallery",
                for image in images {
                    div {
                        key: "{image.id}",
                        class: "gallery-item",
                        img { src: "{image.url}", alt: "{image.alt}" }
                        button {
                            class: "icon-button danger overlay",
                            aria_label: "Delete",
                            onclick: {
                                let image = image.clone();
                                move |_| pending_delete.set(Some(image.clone()))
                            },
                            Icon { width: 14, height: 14, icon: FaTrash }
                        }
                    }
                }
            }

            if let Some(image) = pending_delete() {
                ConfirmDialog {
                    message: "Are you sure?",
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        let id = image.id.clone();
                        spawn(async move {
                            data.delete_gallery_image(id).await;
                        });
                    },
                }
            }
        }
    }
}
