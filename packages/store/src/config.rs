//! # Site configuration (`site.toml`)
//!
//! Describes the committee the site is for and how the team roster is ordered.
//! The server reads the file once (path from its settings) and hands it to the
//! client through `get_site_config`.
//!
//! ## Structure
//!
//! ```toml
//! [site]
//! name = "AAYAM Committee"
//! tagline = "Official College Committee Website"
//! contact_email = "aayamcommittee@gmail.com"
//!
//! [roster]
//! role_order = ["Head", "Vice Head", "Secretary", "Vice Secretary"]
//! empty_groups = "skip"   # or "placeholder" (default)
//! ```
//!
//! Every field has a default, so a missing or partial file is equivalent to the
//! defaults for whatever it omits.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub roster: RosterConfig,
}

/// Identity and contact details shown in the header, footer and contact section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub contact_email: String,
    /// Shown on the home section until an admin saves about text.
    pub default_about: String,
    pub footer: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "AAYAM Committee".to_string(),
            tagline: "Official College Committee Website".to_string(),
            contact_email: "aayamcommittee@gmail.com".to_string(),
            default_about: "AAYAM Committee is a student-led college committee organizing \
                            cultural, sports, and management activities to build leadership, \
                            teamwork, and creativity."
                .to_string(),
            footer: "© 2025 AAYAM Committee | Designed with ❤️".to_string(),
        }
    }
}

/// What to do with a regular department that has no members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyGroups {
    /// Render the department heading with placeholder text.
    #[default]
    Placeholder,
    /// Leave the department out.
    Skip,
}

/// Team roster ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Role keywords in display order.
    pub role_order: Vec<String>,
    /// Department names in display order.
    pub department_order: Vec<String>,
    pub core_department: String,
    pub advisory_department: String,
    pub empty_groups: EmptyGroups,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            role_order: ["Head", "Vice Head", "Secretary", "Vice Secretary"]
                .map(String::from)
                .to_vec(),
            department_order: [
                "Advisory",
                "Management Department",
                "Media Department",
                "Sports & Cultural Head",
                "Sports Department",
                "Cultural Department",
                "Technical",
            ]
            .map(String::from)
            .to_vec(),
            core_department: "Core".to_string(),
            advisory_department: "Advisory".to_string(),
            empty_groups: EmptyGroups::Placeholder,
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.roster.role_order[1], "Vice Head");
        assert_eq!(config.roster.department_order.len(), 7);
        assert_eq!(config.roster.empty_groups, EmptyGroups::Placeholder);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            [site]
            name = "Robotics Club"

            [roster]
            empty_groups = "skip"
            "#,
        )
        .unwrap();
        assert_eq!(config.site.name, "Robotics Club");
        assert_eq!(config.site.contact_email, "aayamcommittee@gmail.com");
        assert_eq!(config.roster.empty_groups, EmptyGroups::Skip);
        assert_eq!(config.roster.core_department, "Core");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = SiteConfig::default();
        config.roster.role_order = vec!["Lead".into(), "Member".into()];
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_empty_groups_value_is_rejected() {
        assert!(SiteConfig::from_toml("[roster]\nempty_groups = \"hide\"").is_err());
    }
}
