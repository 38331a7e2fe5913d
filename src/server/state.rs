//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{model::contact::ContactDto, server::storage::MediaStorage};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by every request.
    pub db: DatabaseConnection,

    /// Media storage backend selected by configuration.
    pub storage: Arc<dyn MediaStorage>,

    /// Contact details served by `/api/contact`.
    pub contact: Arc<ContactDto>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, storage: Arc<dyn MediaStorage>, contact: ContactDto) -> Self {
        Self {
            db,
            storage,
            contact: Arc::new(contact),
        }
    }
}
