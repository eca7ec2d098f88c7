use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{form::optional, FormError, Page, TextInput},
        constant::SITE_NAME,
        model::auth::AuthContext,
        router::Route,
    },
    model::user::SignUpDto,
};

#[cfg(feature = "web")]
use crate::client::{api::user::sign_up, model::auth::AuthState};

/// Matches the minimum length enforced by the server.
const MIN_PASSWORD_LENGTH: usize = 8;

#[component]
pub fn SignUp() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let username = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let user_logged_in = auth_context.read().is_authenticated();

    use_effect(use_reactive!(|user_logged_in| {
        if user_logged_in {
            nav.push(Route::Home {});
        }
    }));

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if password().chars().count() < MIN_PASSWORD_LENGTH {
            error.set(Some(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
            return;
        }
        if password() != confirm() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        let payload = SignUpDto {
            username: optional(username()),
            email: optional(email()),
            password: Some(password()),
        };

        error.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match sign_up(payload).await {
                Ok(user) => {
                    auth_context.set(AuthState::Authenticated(user));
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::debug!("Sign up rejected: {}", err);
                    error.set(Some(err.message));
                }
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        Title { "Sign Up | {SITE_NAME}" }
        Page {
            class: "page-centered",
            form {
                class: "form card auth-card",
                onsubmit: on_submit,
                h1 { class: "page-title", "Create an account" }
                TextInput { label: "Username", value: username, required: true }
                TextInput { label: "Email", value: email, input_type: "email", required: true }
                TextInput {
                    label: "Password",
                    value: password,
                    input_type: "password",
                    required: true,
                }
                TextInput {
                    label: "Confirm password",
                    value: confirm,
                    input_type: "password",
                    required: true,
                }
                FormError { message: error() }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Sign up" }
                }
                p {
                    class: "form-hint",
                    "Already registered? "
                    Link { to: Route::SignIn {}, "Sign in" }
                }
            }
        }
    }
}
