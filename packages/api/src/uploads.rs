//! Image uploads.
//!
//! Files are written below `uploads.dir` under a key of the form
//! `<folder>/<millis>-<name>` and served from `uploads.public_path`.

/// Where an uploaded image belongs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    MemberPhoto,
    EventHero,
    EventGallery(usize),
    Gallery,
}

impl UploadKind {
    pub fn folder(&self) -> &'static str {
        match self {
            UploadKind::MemberPhoto => "team",
            UploadKind::EventHero | UploadKind::EventGallery(_) => "events",
            UploadKind::Gallery => "gallery",
        }
    }

    fn label(&self) -> Option<String> {
        match self {
            UploadKind::EventHero => Some("hero".into()),
            UploadKind::EventGallery(index) => Some(format!("gallery-{index}")),
            _ => None,
        }
    }
}

const MAX_NAME_LEN: usize = 80;

/// Reduce a client file name to `[A-Za-z0-9._-]`, without leading dots.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    let cleaned: String = cleaned.chars().take(MAX_NAME_LEN).collect();
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

/// Storage key for an upload made at `millis` (Unix epoch milliseconds).
pub fn object_key(kind: UploadKind, file_name: &str, millis: i64) -> String {
    let name = sanitize_file_name(file_name);
    match kind.label() {
        Some(label) => format!("{}/{millis}-{label}-{name}", kind.folder()),
        None => format!("{}/{millis}-{name}", kind.folder()),
    }
}

/// Public URL for a stored key.
pub fn public_url(public_path: &str, key: &str) -> String {
    format!("{}/{key}", public_path.trim_end_matches('/'))
}

#[cfg(feature = "server")]
pub use server::save_upload;

#[cfg(feature = "server")]
mod server {
    use std::path::Path;

    use store::ImageUpload;

    use super::{object_key, public_url, UploadKind};
    use crate::error::ApiError;
    use crate::settings::settings;

    /// Write the file and return its public URL.
    pub async fn save_upload(kind: UploadKind, upload: &ImageUpload) -> Result<String, ApiError> {
        let uploads = &settings().uploads;
        if upload.bytes.is_empty() {
            return Err(ApiError::Validation(store::ValidationError::ImageMissing));
        }
        if upload.bytes.len() > uploads.max_bytes {
            return Err(ApiError::Internal(format!(
                "{} is larger than {} bytes",
                upload.file_name, uploads.max_bytes
            )));
        }

        let key = object_key(kind, &upload.file_name, chrono::Utc::now().timestamp_millis());
        let path = Path::new(&uploads.dir).join(&key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &upload.bytes).await?;
        tracing::info!("Stored upload {} ({} bytes)", key, upload.bytes.len());

        Ok(public_url(&uploads.public_path, &key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Group Photo (1).JPG"), "Group-Photo--1-.JPG");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\pics\\me.png"), "me.png");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name("..."), "image");
        assert_eq!(sanitize_file_name(&"a".repeat(200)).len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_object_keys_are_prefixed_by_folder() {
        assert_eq!(
            object_key(UploadKind::MemberPhoto, "asha.png", 1700000000000),
            "team/1700000000000-asha.png"
        );
        assert_eq!(
            object_key(UploadKind::EventHero, "cup.png", 5),
            "events/5-hero-cup.png"
        );
        assert_eq!(
            object_key(UploadKind::EventGallery(2), "day two.png", 5),
            "events/5-gallery-2-day-two.png"
        );
        assert_eq!(object_key(UploadKind::Gallery, "", 5), "gallery/5-image");
    }

    #[test]
    fn test_public_url() {
        assert_eq!(public_url("/uploads/", "team/1-a.png"), "/uploads/team/1-a.png");
        assert_eq!(public_url("/uploads", "team/1-a.png"), "/uploads/team/1-a.png");
    }
}
