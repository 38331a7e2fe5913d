//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They own the rules that
//! span both the database and media storage: storing uploads before a write, removing a
//! freshly stored file when the write fails, and cleaning up replaced or orphaned files.

pub mod event;
pub mod gallery;
pub mod media;
pub mod news;

use sea_orm::DbErr;

use crate::server::error::AppError;

/// Maps a repository `RecordNotFound` to a 404 with the given message.
pub(crate) fn not_found_as(message: &'static str) -> impl Fn(DbErr) -> AppError {
    move |err| match err {
        DbErr::RecordNotFound(_) => AppError::NotFound(message.to_string()),
        err => AppError::DbErr(err),
    }
}
