//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories take care
//! of required foreign keys so tests only spell out what they assert on.
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
//!     let user = factory::create_user(&db).await?;
//!     let share = factory::create_share(&db, &user.id).await?;
//!
//!     // Customize through the builder
//!     let pro = factory::user::UserFactory::new(&db)
//!         .email("pro@inke.app")
//!         .plan("2")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `share_note` - Create share note entities
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod helpers;
pub mod share_note;
pub mod user;

pub use share_note::create_share;
pub use user::create_user;
