//! Slidestore Test Utils
//!
//! Provides shared testing utilities for the slidestore server. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases with only the tables a
//! test asks for, plus factories for inserting slide rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Slides;
//!
//! #[tokio::test]
//! async fn test_slide_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Slides)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
