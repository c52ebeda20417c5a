//! Section navigation for the single-page site.
//!
//! Exactly one [`Section`] is active at a time. Requesting [`Section::Admin`]
//! without admin access soft-redirects to [`Section::Auth`]; the redirect is
//! reported in the returned [`Transition`] so the shell can skip scrolling.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Team,
    Events,
    Gallery,
    Contact,
    Auth,
    Admin,
}

/// Sections listed in the top navigation, in order.
pub const NAV_ITEMS: [Section; 5] = [
    Section::Home,
    Section::Team,
    Section::Events,
    Section::Gallery,
    Section::Contact,
];

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Team,
        Section::Events,
        Section::Gallery,
        Section::Contact,
        Section::Auth,
        Section::Admin,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Team => "team",
            Section::Events => "events",
            Section::Gallery => "gallery",
            Section::Contact => "contact",
            Section::Auth => "auth",
            Section::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Team => "Team",
            Section::Events => "Events",
            Section::Gallery => "Gallery",
            Section::Contact => "Contact",
            Section::Auth => "Login",
            Section::Admin => "Admin Panel",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// What the current visitor may see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Access {
    #[default]
    Anonymous,
    Member,
    Admin,
}

impl Access {
    pub fn of(user: Option<&UserInfo>) -> Self {
        match user {
            None => Access::Anonymous,
            Some(u) if u.is_admin => Access::Admin,
            Some(_) => Access::Member,
        }
    }

    pub fn is_admin(&self) -> bool {
        *self == Access::Admin
    }
}

/// The section actually shown when `requested` is asked for.
pub fn resolve_target(requested: Section, access: Access) -> Section {
    match requested {
        Section::Admin if !access.is_admin() => Section::Auth,
        other => other,
    }
}

/// Result of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub section: Section,
    pub redirected: bool,
}

impl Transition {
    /// Whether the viewport should scroll to the top after this transition.
    pub fn scrolls(&self) -> bool {
        !self.redirected
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    active: Section,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn navigate(&mut self, target: Section, access: Access) -> Transition {
        let section = resolve_target(target, access);
        self.active = section;
        Transition {
            section,
            redirected: section != target,
        }
    }

    /// Success callback of the sign-in form.
    pub fn on_auth_success(&mut self) -> Transition {
        self.go_home()
    }

    pub fn on_logout(&mut self) -> Transition {
        self.go_home()
    }

    fn go_home(&mut self) -> Transition {
        self.active = Section::Home;
        Transition {
            section: Section::Home,
            redirected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_section_is_home() {
        assert_eq!(Navigation::new().active(), Section::Home);
    }

    #[test]
    fn test_admin_requires_admin_access() {
        assert_eq!(resolve_target(Section::Admin, Access::Anonymous), Section::Auth);
        assert_eq!(resolve_target(Section::Admin, Access::Member), Section::Auth);
        assert_eq!(resolve_target(Section::Admin, Access::Admin), Section::Admin);
        for section in Section::ALL.into_iter().filter(|s| *s != Section::Admin) {
            assert_eq!(resolve_target(section, Access::Anonymous), section);
        }
    }

    #[test]
    fn test_redirect_is_reported_and_does_not_scroll() {
        let mut nav = Navigation::new();
        let t = nav.navigate(Section::Admin, Access::Anonymous);
        assert_eq!(t.section, Section::Auth);
        assert!(t.redirected);
        assert!(!t.scrolls());
        assert_eq!(nav.active(), Section::Auth);

        let t = nav.navigate(Section::Team, Access::Anonymous);
        assert!(t.scrolls());
        assert_eq!(nav.active(), Section::Team);
    }

    #[test]
    fn test_sign_in_then_success_callback_goes_home() {
        let mut nav = Navigation::new();
        nav.navigate(Section::Admin, Access::Anonymous);
        assert_eq!(nav.active(), Section::Auth);
        nav.on_auth_success();
        assert_eq!(nav.active(), Section::Home);
    }

    #[test]
    fn test_logout_from_any_state_goes_home() {
        for section in Section::ALL {
            let mut nav = Navigation::new();
            nav.navigate(section, Access::Admin);
            assert_eq!(nav.on_logout().section, Section::Home);
            assert_eq!(nav.active(), Section::Home);
        }
    }

    #[test]
    fn test_access_of_user() {
        let mut user = UserInfo {
            id: "u1".into(),
            email: "a@b.c".into(),
            is_admin: false,
        };
        assert_eq!(Access::of(None), Access::Anonymous);
        assert_eq!(Access::of(Some(&user)), Access::Member);
        user.is_admin = true;
        assert_eq!(Access::of(Some(&user)), Access::Admin);
    }

    #[test]
    fn test_parse_ids() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.id()), Some(section));
        }
        assert_eq!(Section::parse(" Gallery "), Some(Section::Gallery));
        assert_eq!(Section::parse("blog"), None);
        assert!(!NAV_ITEMS.contains(&Section::Admin));
    }
}
