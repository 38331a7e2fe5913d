//! DTOs shared between the server API and the client pages.

pub mod api;
pub mod contact;
pub mod event;
pub mod gallery;
pub mod news;
