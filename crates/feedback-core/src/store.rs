//! The `FeedbackStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (`feedback-store-memory`,
//! `feedback-store-sqlite`). Higher layers depend on this abstraction, not on
//! any concrete backend; which backend runs is a process-start configuration
//! decision.

use std::future::Future;

use uuid::Uuid;

use crate::{
  complaint::{Category, Complaint, ComplaintStatus},
  suggestion::Suggestion,
  user::User,
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Field-equality filter for [`FeedbackStore::list_complaints`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplaintFilter {
  pub status:   Option<ComplaintStatus>,
  pub category: Option<Category>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a feedback record store.
///
/// Absence is always `Ok(None)`, never an error: reading or updating a
/// non-existent id signals "not found" to the caller without failing the
/// store. Updates are whole-record and last-write-wins; the backend provides
/// per-record atomicity only, never cross-record transactions.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes (tokio with axum).
pub trait FeedbackStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Complaints ────────────────────────────────────────────────────────

  /// Persist a new complaint. The reference ID must be unique; a duplicate
  /// is a backend error.
  fn insert_complaint(
    &self,
    complaint: Complaint,
  ) -> impl Future<Output = Result<Complaint, Self::Error>> + Send + '_;

  /// Retrieve a complaint by id. Returns `None` if not found.
  fn get_complaint(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Complaint>, Self::Error>> + Send + '_;

  /// Retrieve a complaint by its public tracking code.
  fn get_complaint_by_reference<'a>(
    &'a self,
    reference_id: &'a str,
  ) -> impl Future<Output = Result<Option<Complaint>, Self::Error>> + Send + 'a;

  /// List complaints matching `filter`, newest first.
  fn list_complaints<'a>(
    &'a self,
    filter: &'a ComplaintFilter,
  ) -> impl Future<Output = Result<Vec<Complaint>, Self::Error>> + Send + 'a;

  /// Replace the stored complaint with the same id. Returns `None` when the
  /// id is absent.
  fn update_complaint(
    &self,
    complaint: Complaint,
  ) -> impl Future<Output = Result<Option<Complaint>, Self::Error>> + Send + '_;

  // ── Suggestions ───────────────────────────────────────────────────────

  fn insert_suggestion(
    &self,
    suggestion: Suggestion,
  ) -> impl Future<Output = Result<Suggestion, Self::Error>> + Send + '_;

  fn get_suggestion(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Suggestion>, Self::Error>> + Send + '_;

  /// List all suggestions, newest first.
  fn list_suggestions(
    &self,
  ) -> impl Future<Output = Result<Vec<Suggestion>, Self::Error>> + Send + '_;

  /// Replace the stored suggestion with the same id. Returns `None` when the
  /// id is absent.
  fn update_suggestion(
    &self,
    suggestion: Suggestion,
  ) -> impl Future<Output = Result<Option<Suggestion>, Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Persist a new user. A duplicate username is a backend error.
  fn insert_user(
    &self,
    user: User,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn get_user_by_username<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Overwrite a user's password hash. Returns the updated user, or `None`
  /// when the id is absent.
  fn update_user_password(
    &self,
    id: Uuid,
    password_hash: String,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;
}
