//! HTTP surface of the contact book.
//!
//! Loaders answer `GET` requests with JSON page data, actions answer form
//! `POST`s and usually redirect to the view the caller should load next.

pub mod error;
pub mod handlers;

use crate::prelude::{AppError, ContactManager};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::trace::TraceLayer;

pub use error::ErrorResponse;

#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<Mutex<ContactManager>>,
}

impl AppState {
    pub fn new(manager: ContactManager) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn manager(&self) -> Result<MutexGuard<'_, ContactManager>, AppError> {
        Ok(self.manager.lock()?)
    }

    /// Runs one store call on the blocking pool, since saves write the
    /// contacts file while the lock is held.
    pub async fn with_manager<F, T>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut ContactManager) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let manager = Arc::clone(&self.manager);
        tokio::task::spawn_blocking(move || {
            let mut guard = manager.lock()?;
            f(&mut guard)
        })
        .await
        .map_err(|e| AppError::Internal(format!("store task failed: {e}")))?
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_loader).post(handlers::create_action))
        .route(
            "/contacts/:contactId",
            get(handlers::contact_loader).post(handlers::favorite_action),
        )
        .route(
            "/contacts/:contactId/edit",
            get(handlers::contact_loader).post(handlers::edit_action),
        )
        .route(
            "/contacts/:contactId/destroy",
            post(handlers::destroy_action),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
