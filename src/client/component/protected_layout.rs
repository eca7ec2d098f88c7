use dioxus::prelude::*;

use crate::client::{
    component::page::LoadingPage,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn RequiresSignedIn() -> Element {
    rsx! {
        ProtectedLayout {  }
    }
}

/// Renders the nested route only for signed-in users and sends everyone else to sign-in.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let state = auth_context.read().clone();
    let fetch_completed = state.is_resolved();
    let user_logged_in = state.is_authenticated();

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::SignIn {});
        }
    }));

    rsx! {
        match state {
            AuthState::Initializing => rsx! { LoadingPage {  } },
            AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
            // Render nothing while redirecting via the use_effect
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {},
        }
    }
}
