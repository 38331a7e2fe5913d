//! Database repository layer for the site's resources.
//!
//! Repositories wrap SeaORM queries for a single entity and convert entity models into
//! domain models at this boundary. They return `DbErr` and leave HTTP concerns to the
//! service and controller layers.

pub mod event;
pub mod gallery;
pub mod news;

#[cfg(test)]
mod test;
