//! Loading `site.toml`.

use std::sync::OnceLock;

use store::SiteConfig;

use crate::settings::settings;

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// The site configuration, read once from `site.config_path`.
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| load(&settings().site.config_path))
}

/// Read a config file. A missing file gives the defaults; a broken one is
/// logged and also gives the defaults.
pub fn load(path: &str) -> SiteConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => match SiteConfig::from_toml(&text) {
            Ok(config) => {
                tracing::info!("Loaded site configuration from {}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path, e);
                SiteConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => SiteConfig::default(),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path, e);
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        assert_eq!(load("does/not/exist/site.toml"), SiteConfig::default());
    }
}
