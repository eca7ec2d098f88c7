#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod admin;

#[cfg(feature = "web")]
pub mod background;

#[cfg(feature = "web")]
pub mod character;

#[cfg(feature = "web")]
pub mod resource;

#[cfg(feature = "web")]
pub mod rote;

#[cfg(feature = "web")]
pub mod user;
