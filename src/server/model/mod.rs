//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated input
//! from controllers down to services and repositories.

pub mod event;
pub mod gallery;
pub mod news;
pub mod upload;
