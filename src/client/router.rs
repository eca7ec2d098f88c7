use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresSignedIn};
use crate::client::route::{
    Admin, Backgrounds, Characters, Home, NotFound, Resources, SignIn, SignUp,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/resources")]
        Resources {},

        #[route("/backgrounds")]
        Backgrounds {},

        #[route("/sign-in")]
        SignIn {},

        #[route("/sign-up")]
        SignUp {},

        #[route("/admin")]
        Admin {},

        #[layout(RequiresSignedIn)]
            #[route("/characters")]
            Characters {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
