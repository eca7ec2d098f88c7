//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Password hashing, admin secret checks and ownership rules
//! - **Orchestration**: Coordinating repository calls for a single request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod auth;
pub mod background;
pub mod character;
pub mod resource;
pub mod rote;
