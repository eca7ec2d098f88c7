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
    model::user::SignInDto,
};

#[cfg(feature = "web")]
use crate::client::{api::user::sign_in, model::auth::AuthState};

#[component]
pub fn SignIn() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let username = use_signal(String::new);
    let password = use_signal(String::new);
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

        let payload = SignInDto {
            username: optional(username()),
            password: Some(password()),
        };

        error.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match sign_in(payload).await {
                Ok(user) => {
                    auth_context.set(AuthState::Authenticated(user));
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::debug!("Sign in rejected: {}", err);
                    error.set(Some(err.message));
                }
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        Title { "Sign In | {SITE_NAME}" }
        Page {
            class: "page-centered",
            form {
                class: "form card auth-card",
                onsubmit: on_submit,
                h1 { class: "page-title", "Sign in" }
                TextInput { label: "Username", value: username, required: true }
                TextInput {
                    label: "Password",
                    value: password,
                    input_type: "password",
                    required: true,
                }
                FormError { message: error() }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
                p {
                    class: "form-hint",
                    "No account yet? "
                    Link { to: Route::SignUp {}, "Sign up" }
                }
            }
        }
    }
}
