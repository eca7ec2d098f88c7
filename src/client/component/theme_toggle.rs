use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaMoon, FaSun},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::constant::THEME_STORAGE_KEY;

/// Applies the stored theme (falling back to the system preference) and reports whether
/// dark mode is active.
fn restore_script() -> String {
    format!(
        r#"
        const stored = localStorage.getItem("{THEME_STORAGE_KEY}");
        const dark = stored ? stored === "dark"
            : window.matchMedia("(prefers-color-scheme: dark)").matches;
        document.documentElement.classList.toggle("dark", dark);
        return dark;
        "#
    )
}

/// Flips the `dark` class on `<html>`, stores the choice and reports the new state.
fn toggle_script() -> String {
    format!(
        r#"
        const dark = document.documentElement.classList.toggle("dark");
        localStorage.setItem("{THEME_STORAGE_KEY}", dark ? "dark" : "light");
        return dark;
        "#
    )
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut dark = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            match document::eval(&restore_script()).join::<bool>().await {
                Ok(is_dark) => dark.set(is_dark),
                Err(err) => tracing::warn!("Failed to restore theme: {:?}", err),
            }
        });
    });

    let on_toggle = move |_| {
        spawn(async move {
            match document::eval(&toggle_script()).join::<bool>().await {
                Ok(is_dark) => dark.set(is_dark),
                Err(err) => tracing::warn!("Failed to toggle theme: {:?}", err),
            }
        });
    };

    rsx!(button {
        class: "btn btn-ghost theme-toggle",
        title: if dark() { "Switch to light theme" } else { "Switch to dark theme" },
        onclick: on_toggle,
        if dark() {
            Icon { width: 18, height: 18, icon: FaSun }
        } else {
            Icon { width: 18, height: 18, icon: FaMoon }
        }
    })
}
