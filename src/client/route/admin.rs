use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{
    component::{FormError, Page, TextInput},
    constant::SITE_NAME,
};

#[cfg(feature = "web")]
use crate::client::api::admin::{authenticate, delete_all, seed};

#[derive(Clone, Copy, PartialEq)]
enum AdminAction {
    Seed,
    DeleteAll,
}

/// Password-gated maintenance page. The password is kept in memory only and sent with
/// every action; the server checks it on each request.
#[component]
pub fn Admin() -> Element {
    let password = use_signal(String::new);
    let mut authenticated = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut status = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let on_authenticate = move |evt: Event<FormData>| {
        evt.prevent_default();
        error.set(None);
        busy.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match authenticate(password()).await {
                Ok(result) => authenticated.set(result.authenticated),
                Err(err) => {
                    tracing::debug!("Admin authentication rejected: {}", err);
                    error.set(Some(err.message));
                }
            }
            busy.set(false);
        });
    };

    #[allow(unused_variables)]
    let mut run_action = move |action: AdminAction| {
        error.set(None);
        status.set(None);
        busy.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = match action {
                AdminAction::Seed => seed(password()).await,
                AdminAction::DeleteAll => delete_all(password()).await,
            };

            match result {
                Ok(outcome) => status.set(Some(outcome.message)),
                Err(err) => {
                    tracing::error!("Admin action failed: {}", err);
                    // A rejected password ends the admin session on the client
                    if err.is_unauthorized() {
                        authenticated.set(false);
                    }
                    error.set(Some(err.message));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        Page {
            class: "page-centered",
            if !authenticated() {
                form {
                    class: "form card auth-card",
                    onsubmit: on_authenticate,
                    h1 { class: "page-title", "Admin" }
                    TextInput {
                        label: "Admin password",
                        value: password,
                        input_type: "password",
                        required: true,
                    }
                    FormError { message: error() }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: busy(),
                        "Unlock"
                    }
                }
            } else {
                div {
                    class: "card auth-card",
                    h1 { class: "page-title", "Admin" }
                    p { "Manage the rote catalogue." }
                    div {
                        class: "button-row",
                        button {
                            class: "btn",
                            disabled: busy(),
                            onclick: move |_| run_action(AdminAction::Seed),
                            "Seed sample rotes"
                        }
                        button {
                            class: "btn btn-danger",
                            disabled: busy(),
                            onclick: move |_| run_action(AdminAction::DeleteAll),
                            "Delete all rotes"
                        }
                    }
                    if let Some(message) = status() {
                        p { class: "form-success", "{message}" }
                    }
                    FormError { message: error() }
                }
            }
        }
    }
}
