use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::{api::user::get_user, model::auth::AuthState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context_provider(AuthContext::new);

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                auth_context.set(match result {
                    Ok(user) => AuthState::from(user.clone()),
                    Err(e) => AuthState::Error(e.clone()),
                });
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Fan-made catalogue of rotes, backgrounds and resources"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
