use dioxus::prelude::*;
use store::validate::validate_credentials;

use crate::components::{Button, ButtonVariant, Field};
use crate::site_data::server_message;
use crate::{notify, use_auth, use_notifications, use_site_data, AuthState, NoticeLevel};

/// What the auth section shows for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthView {
    /// The session check has not answered yet.
    Loading,
    Account,
    Credentials,
}

impl AuthView {
    fn of(state: &AuthState) -> Self {
        if state.loading {
            AuthView::Loading
        } else if state.user.is_some() {
            AuthView::Account
        } else {
            AuthView::Credentials
        }
    }
}

/// Heading, subtitle and submit label of the credentials form.
fn form_text(signing_up: bool, site_name: &str) -> (&'static str, String, &'static str) {
    if signing_up {
        ("Create Account", format!("Sign up to join {site_name}"), "Sign Up")
    } else {
        ("Login", "Welcome Back".to_string(), "Login")
    }
}

/// Sign-in and sign-up form, or the account card once signed in.
#[component]
pub fn AuthSection(on_success: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let auth = use_auth();

    rsx! {
        section {
            id: "auth",
            class: "section auth-section",
            match AuthView::of(&auth()) {
                AuthView::Loading => rsx! { div { class: "page-loading", "Loading..." } },
                AuthView::Account => rsx! { AccountCard { on_logout } },
                AuthView::Credentials => rsx! { CredentialsForm { on_success } },
            }
        }
    }
}

#[component]
fn CredentialsForm(on_success: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut notifications = use_notifications();
    let data = use_site_data();

    let mut signing_up = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let mut submit = move || {
        if busy() {
            return;
        }
        let confirm_value = confirm();
        let confirm_arg = signing_up().then_some(confirm_value.as_str());
        if let Err(e) = validate_credentials(&email(), &password(), confirm_arg) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        busy.set(true);

        let (email_value, password_value, registering) = (email(), password(), signing_up());
        spawn(async move {
            let result = if registering {
                api::register(email_value, password_value).await
            } else {
                api::login_password(email_value, password_value).await
            };
            busy.set(false);
            match result {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    password.set(String::new());
                    confirm.set(String::new());
                    let message = if registering {
                        "Account created successfully!"
                    } else {
                        "Logged in successfully!"
                    };
                    notify(&mut notifications, NoticeLevel::Success, message);
                    on_success.call(());
                }
                Err(e) => error.set(Some(server_message(&e))),
            }
        });
    };

    let (title, subtitle, action) = form_text(signing_up(), &data.config.read().site.name);

    rsx! {
        div {
            class: "auth-card",
            h2 { "{title}" }
            p { class: "auth-subtitle", "{subtitle}" }

            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit();
                },
                Field {
                    label: "Email",
                    html_for: "auth-email",
                    input {
                        id: "auth-email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                Field {
                    label: "Password",
                    html_for: "auth-password",
                    input {
                        id: "auth-password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if signing_up() {
                    Field {
                        label: "Confirm Password",
                        html_for: "auth-confirm",
                        input {
                            id: "auth-confirm",
                            r#type: "password",
                            value: "{confirm}",
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                Button {
                    r#type: "submit",
                    class: "btn-block",
                    disabled: busy(),
                    if busy() { "Please wait..." } else { "{action}" }
                }
            }

            button {
                class: "auth-toggle",
                onclick: move |_| {
                    signing_up.toggle();
                    error.set(None);
                },
                if signing_up() {
                    "Already have an account? Login"
                } else {
                    "Don't have an account? Sign Up"
                }
            }
        }
    }
}

#[component]
fn AccountCard(on_logout: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut notifications = use_notifications();
    let Some(user) = auth().user else {
        return rsx! {};
    };

    let sign_out = move |_: MouseEvent| {
        spawn(async move {
            match api::logout().await {
                Ok(()) => {
                    auth.set(AuthState::signed_out());
                    notify(&mut notifications, NoticeLevel::Success, "Logged out successfully");
                    on_logout.call(());
                }
                Err(e) => {
                    let message = format!("Failed to log out: {}", server_message(&e));
                    notify(&mut notifications, NoticeLevel::Error, &message);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card account-card",
            div { class: "account-avatar", "{user.initial()}" }
            p { class: "account-email", "{user.email}" }
            if !user.is_admin {
                p {
                    class: "account-note",
                    "You are signed in. Admin tools are available once an administrator grants you access."
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: sign_out,
                "Sign Out"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::UserInfo;

    #[test]
    fn test_view_waits_for_session_check() {
        assert_eq!(AuthView::of(&AuthState::default()), AuthView::Loading);
        assert_eq!(AuthView::of(&AuthState::signed_out()), AuthView::Credentials);
        let user = UserInfo {
            id: "u1".into(),
            email: "asha@example.com".into(),
            is_admin: false,
        };
        assert_eq!(AuthView::of(&AuthState::signed_in(user)), AuthView::Account);
    }

    #[test]
    fn test_sign_up_subtitle_uses_site_name() {
        let (title, subtitle, action) = form_text(true, "Robotics Club");
        assert_eq!(title, "Create Account");
        assert_eq!(subtitle, "Sign up to join Robotics Club");
        assert_eq!(action, "Sign Up");
        assert_eq!(form_text(false, "Robotics Club").1, "Welcome Back");
    }
}
