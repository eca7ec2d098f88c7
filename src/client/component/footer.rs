use dioxus::prelude::*;

use crate::client::constant::SITE_NAME;

#[component]
pub fn Footer() -> Element {
    rsx!(footer {
        class: "footer",
        p {
            "{SITE_NAME} is an unofficial fan project. Game content belongs to its respective publishers."
        }
        a {
            href: "/api/docs",
            "API documentation"
        }
    })
}
