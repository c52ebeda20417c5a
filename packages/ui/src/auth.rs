//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;
use store::Access;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn access(&self) -> Access {
        Access::of(self.user.as_ref())
    }

    pub fn is_admin(&self) -> bool {
        self.access().is_admin()
    }

    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(user)) => auth_state.set(AuthState::signed_in(user)),
            Ok(None) => auth_state.set(AuthState::signed_out()),
            Err(e) => {
                tracing::warn!("Failed to load current user: {}", e);
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
