//! SeaORM entity models for the grimoire catalogue.

pub mod prelude;

pub mod background;
pub mod character;
pub mod resource;
pub mod rote;
pub mod user;
