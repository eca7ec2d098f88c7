//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! catalogue records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs and carry the required-field validation.

pub mod background;
pub mod character;
pub mod resource;
pub mod rote;
pub mod user;
