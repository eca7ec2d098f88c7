//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let rote = factory::create_rote(&db).await?;
//!     let user = factory::create_user(&db).await?;
//!     let character = factory::create_character(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let resource = factory::resource::ResourceFactory::new(&db)
//!     .name("Book of Chantries")
//!     .resource_type("Book")
//!     .featured(true)
//!     .build()
//!     .await?;
//! ```

pub mod background;
pub mod character;
pub mod helpers;
pub mod resource;
pub mod rote;
pub mod user;

pub use background::create_background;
pub use character::create_character;
pub use resource::create_resource;
pub use rote::create_rote;
pub use user::create_user;
