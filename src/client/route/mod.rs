pub mod admin;
pub mod backgrounds;
pub mod characters;
pub mod home;
pub mod not_found;
pub mod resources;
pub mod sign_in;
pub mod sign_up;

pub use admin::Admin;
pub use backgrounds::Backgrounds;
pub use characters::Characters;
pub use home::Home;
pub use not_found::NotFound;
pub use resources::Resources;
pub use sign_in::SignIn;
pub use sign_up::SignUp;
