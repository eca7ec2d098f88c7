//! Data transfer objects shared by the server API and the web client.

pub mod admin;
pub mod api;
pub mod background;
pub mod character;
pub mod resource;
pub mod rote;
pub mod user;
