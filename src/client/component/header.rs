use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{
    component::ThemeToggle, constant::SITE_NAME, model::auth::AuthContext, router::Route,
};

#[cfg(feature = "web")]
use crate::client::{api::user::sign_out, model::auth::AuthState};

#[component]
pub fn Header() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context::<AuthContext>();
    #[allow(unused_variables)]
    let nav = navigator();

    let state = auth_context.read().clone();
    let username = state.user().map(|u| u.username.clone());

    let on_sign_out = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match sign_out().await {
                Ok(()) => {
                    auth_context.set(AuthState::NotLoggedIn);
                    nav.push(Route::Home {});
                }
                Err(err) => tracing::error!("Failed to sign out: {}", err),
            }
        });
    };

    rsx!(header {
        class: "header",
        div {
            class: "header-brand",
            Link {
                to: Route::Home {},
                class: "site-name",
                {SITE_NAME}
            }
            nav {
                class: "header-nav",
                Link { to: Route::Home {}, "Rotes" }
                Link { to: Route::Backgrounds {}, "Backgrounds" }
                Link { to: Route::Resources {}, "Resources" }
                if state.is_authenticated() {
                    Link { to: Route::Characters {}, "Characters" }
                }
                Link { to: Route::Admin {}, "Admin" }
            }
        }
        div {
            class: "header-actions",
            ThemeToggle {  }
            if let Some(username) = username {
                span { class: "username", "{username}" }
                button {
                    class: "btn btn-outline",
                    onclick: on_sign_out,
                    "Sign out"
                }
            } else if state.is_resolved() {
                Link {
                    to: Route::SignIn {},
                    class: "btn btn-outline",
                    "Sign in"
                }
                Link {
                    to: Route::SignUp {},
                    class: "btn",
                    "Sign up"
                }
            }
        }
    })
}
