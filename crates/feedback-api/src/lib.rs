//! JSON REST API for the campus feedback platform.
//!
//! Exposes an axum [`Router`] backed by any
//! [`feedback_core::store::FeedbackStore`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", feedback_api::api_router(state))
//! ```

pub mod auth;
pub mod complaints;
pub mod error;
pub mod stats;
pub mod suggestions;
pub mod validate;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch, post, put},
};
use feedback_core::{reference::ReferenceAllocator, store::FeedbackStore};

pub use error::{ApiError, FieldError};

/// Shared state threaded through all API handlers.
pub struct ApiState<S> {
  pub store: Arc<S>,
  pub refs:  Arc<ReferenceAllocator>,
}

// Manual impl: `S` itself need not be `Clone` behind the `Arc`s.
impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
      refs:  Arc::clone(&self.refs),
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: FeedbackStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Complaints
    .route(
      "/complaints",
      get(complaints::list::<S>).post(complaints::create::<S>),
    )
    // Same placeholder name as the status route below; the router requires
    // consistent parameter names at a given position.
    .route("/complaints/{id}", get(complaints::get_by_reference::<S>))
    .route("/complaints/{id}/status", patch(complaints::update_status::<S>))
    .route("/complaints/status/{status}", get(complaints::list_by_status::<S>))
    .route(
      "/complaints/category/{category}",
      get(complaints::list_by_category::<S>),
    )
    // Suggestions
    .route(
      "/suggestions",
      get(suggestions::list::<S>).post(suggestions::create::<S>),
    )
    .route(
      "/suggestions/{id}/status",
      patch(suggestions::update_status::<S>),
    )
    // Dashboard statistics
    .route("/stats", get(stats::overview::<S>))
    // Auth
    .route("/auth/login", post(auth::login::<S>))
    .route("/auth/password", put(auth::change_password::<S>))
    .with_state(state)
}
