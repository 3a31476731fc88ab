//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the values they
//! care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
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
//!     let slide = factory::slide::create_slide(&db).await?;
//!     let titled = factory::slide::SlideFactory::new(&db)
//!         .json(serde_json::json!({ "title": "hi" }))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `slide` - Create slide entities
//! - `helpers` - Shared counters and bulk helpers

pub mod helpers;
pub mod slide;

pub use helpers::create_slides;
pub use slide::create_slide;
