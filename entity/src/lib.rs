//! SeaORM entity definitions for the site's persisted records.

pub mod prelude;

pub mod event;
pub mod gallery_image;
pub mod news;
