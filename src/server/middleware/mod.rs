//! Request guards and session wrappers.
//!
//! - `session` - Typed access to values stored in the tower-sessions `Session`
//! - `auth` - `AuthGuard` resolving the signed-in user for protected endpoints

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
