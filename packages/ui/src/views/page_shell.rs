use dioxus::prelude::*;
use store::nav::resolve_target;
use store::{Access, Navigation, Section, Transition};

use crate::components::{Footer, Header, Lightbox, Navbar};
use crate::sections::{
    AdminSection, AuthSection, ContactSection, EventsSection, GallerySection, HomeSection,
    TeamSection,
};
use crate::{scroll_to_top, use_auth, use_site_data};

/// Where the header account button leads.
fn account_target(access: Access) -> Section {
    if access.is_admin() {
        Section::Admin
    } else {
        Section::Auth
    }
}

/// The single page: header, navigation, the active section and the footer.
///
/// Section changes go through [`Navigation`], so asking for the admin panel
/// without admin access lands on the sign-in section instead.
#[component]
pub fn PageShell() -> Element {
    let data = use_site_data();
    let auth = use_auth();
    let mut nav = use_signal(Navigation::new);
    let mut lightbox = use_signal(|| None::<String>);

    let apply = move |transition: Transition| {
        tracing::debug!(
            "Showing {} (redirected: {})",
            transition.section.id(),
            transition.redirected
        );
        if transition.scrolls() {
            scroll_to_top();
        }
    };

    let mut navigate = move |target: Section| {
        let transition = nav.write().navigate(target, auth().access());
        apply(transition);
    };
    let mut auth_success = move || {
        let transition = nav.write().on_auth_success();
        apply(transition);
    };
    let mut logged_out = move || {
        let transition = nav.write().on_logout();
        apply(transition);
    };

    let access = auth().access();
    // Losing admin access while the panel is open falls back to sign-in.
    let active = resolve_target(nav.read().active(), access);

    rsx! {
        div {
            class: "page",
            Header { on_account: move |_| navigate(account_target(access)) }
            Navbar { active, on_navigate: move |section| navigate(section) }

            main {
                class: "page-content",
                if (data.loading)() {
                    div { class: "page-loading", "Loading..." }
                } else {
                    match active {
                        Section::Home => rsx! { HomeSection {} },
                        Section::Team => rsx! { TeamSection {} },
                        Section::Events => rsx! {
                            EventsSection { on_image: move |url| lightbox.set(Some(url)) }
                        },
                        Section::Gallery => rsx! {
                            GallerySection { on_image: move |url| lightbox.set(Some(url)) }
                        },
                        Section::Contact => rsx! { ContactSection {} },
                        Section::Auth => rsx! {
                            AuthSection {
                                on_success: move |_| auth_success(),
                                on_logout: move |_| logged_out(),
                            }
                        },
                        Section::Admin => rsx! {
                            AdminSection { on_logout: move |_| logged_out() }
                        },
                    }
                }
            }

            Footer {
                show_admin_link: access.is_admin(),
                on_admin: move |_| navigate(Section::Admin),
            }

            if let Some(src) = lightbox() {
                Lightbox { src, on_close: move |_| lightbox.set(None) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_button_target() {
        assert_eq!(account_target(Access::Anonymous), Section::Auth);
        assert_eq!(account_target(Access::Member), Section::Auth);
        assert_eq!(account_target(Access::Admin), Section::Admin);
    }
}
