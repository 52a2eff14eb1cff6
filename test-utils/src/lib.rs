//! Foodgram Test Utils
//!
//! Shared testing utilities for the Foodgram backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases, plus factories that insert entities with sensible
//! defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories (users, tags, ingredients, recipes and their links)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_recipe_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_foodgram_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (author, recipe) = factory::helpers::create_recipe_with_author(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
