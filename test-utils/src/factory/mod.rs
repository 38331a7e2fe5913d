//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
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
//!     let event = factory::create_event(&db).await?;
//!     let news = factory::create_news(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::event::EventFactory;
//!
//! let event = EventFactory::new(&db)
//!     .title("Dashain Night")
//!     .featured(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `event` - Create event entities
//! - `news` - Create news entities
//! - `gallery_image` - Create gallery image entities
//! - `helpers` - Shared counters for unique values

pub mod event;
pub mod gallery_image;
pub mod helpers;
pub mod news;

// Re-export commonly used factory functions for concise usage
pub use event::{create_event, create_event_at};
pub use gallery_image::create_gallery_image;
pub use news::{create_news, create_news_at};
