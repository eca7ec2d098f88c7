use dioxus::prelude::*;

use crate::client::{
    component::{Footer, Header},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {  }
        div {
            class: "flex-1",
            Outlet::<Route> {}
        }
        Footer {  }
    })
}
