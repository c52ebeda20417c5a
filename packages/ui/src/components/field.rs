use dioxus::prelude::*;
use store::ImageUpload;

/// A labelled form row.
#[component]
pub fn Field(label: String, #[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        div {
            class: "field",
            label { r#for: "{html_for}", "{label}" }
            {children}
        }
    }
}

/// Read every file picked in a file input.
pub async fn read_uploads(evt: FormEvent) -> Vec<ImageUpload> {
    let mut uploads = Vec::new();
    for file in evt.files() {
        let file_name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => uploads.push(ImageUpload {
                file_name,
                bytes: bytes.to_vec(),
            }),
            Err(e) => tracing::warn!("Could not read {}: {}", file_name, e),
        }
    }
    uploads
}
