//! Factory methods for creating test data.
//!
//! Each factory inserts an entity with sensible defaults and exposes builder methods for the
//! fields a test cares about. Unique columns (emails, usernames, tag names, colors, slugs) are
//! derived from a shared counter so factories can be called repeatedly in one database.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::user::create_user(db).await?;
//! let tag = factory::tag::create_tag(db).await?;
//! let salt = factory::ingredient::create_ingredient(db).await?;
//!
//! let recipe = factory::recipe::RecipeFactory::new(db, author.id)
//!     .tag(tag.id)
//!     .ingredient(salt.id, 5)
//!     .build()
//!     .await?;
//!
//! factory::link::create_favorite(db, author.id, recipe.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users, optionally admins
//! - `tag` - Tags with unique name, color and slug
//! - `ingredient` - Ingredients
//! - `recipe` - Recipes with their tag and ingredient links
//! - `link` - Favorites, shopping cart entries and follows
//! - `helpers` - Counter and multi-entity shortcuts

pub mod helpers;
pub mod ingredient;
pub mod link;
pub mod recipe;
pub mod tag;
pub mod user;

pub use ingredient::create_ingredient;
pub use recipe::create_recipe;
pub use tag::create_tag;
pub use user::create_user;
