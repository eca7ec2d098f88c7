//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated parameters, run access checks, call
//! the matching service and convert the result back into DTOs. Each handler is annotated
//! with `#[utoipa::path]` so it appears in the OpenAPI document served at `/api/docs`.
//!
//! JSON bodies are taken as `Result<Json<T>, JsonRejection>` so that a malformed body flows
//! through `AppError` like every other failure.

pub mod admin;
pub mod auth;
pub mod background;
pub mod character;
pub mod resource;
pub mod rote;
