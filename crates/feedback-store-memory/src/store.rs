//! [`MemoryStore`] — a `HashMap`-backed implementation of [`FeedbackStore`].

use std::{
  collections::HashMap,
  sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use feedback_core::{
  complaint::Complaint,
  store::{ComplaintFilter, FeedbackStore},
  suggestion::Suggestion,
  user::User,
};
use uuid::Uuid;

use crate::{Error, Result};

/// A feedback store held entirely in process memory.
///
/// Cloning is cheap — all clones share the same maps.
#[derive(Clone, Default)]
pub struct MemoryStore {
  inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
  complaints:  RwLock<HashMap<Uuid, Complaint>>,
  suggestions: RwLock<HashMap<Uuid, Suggestion>>,
  users:       RwLock<HashMap<Uuid, User>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

// Locks are only held across in-memory map operations, never across an await.
fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
  lock.read().map_err(|_| Error::Poisoned)
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
  lock.write().map_err(|_| Error::Poisoned)
}

impl FeedbackStore for MemoryStore {
  type Error = Error;

  // ── Complaints ────────────────────────────────────────────────────────────

  async fn insert_complaint(&self, complaint: Complaint) -> Result<Complaint> {
    let mut complaints = write(&self.inner.complaints)?;

    if complaints
      .values()
      .any(|c| c.reference_id == complaint.reference_id)
    {
      return Err(Error::DuplicateReference(complaint.reference_id));
    }

    complaints.insert(complaint.complaint_id, complaint.clone());
    Ok(complaint)
  }

  async fn get_complaint(&self, id: Uuid) -> Result<Option<Complaint>> {
    Ok(read(&self.inner.complaints)?.get(&id).cloned())
  }

  async fn get_complaint_by_reference(
    &self,
    reference_id: &str,
  ) -> Result<Option<Complaint>> {
    Ok(
      read(&self.inner.complaints)?
        .values()
        .find(|c| c.reference_id == reference_id)
        .cloned(),
    )
  }

  async fn list_complaints(
    &self,
    filter: &ComplaintFilter,
  ) -> Result<Vec<Complaint>> {
    let mut complaints: Vec<Complaint> = read(&self.inner.complaints)?
      .values()
      .filter(|c| filter.status.is_none_or(|s| c.status == s))
      .filter(|c| filter.category.is_none_or(|cat| c.category == cat))
      .cloned()
      .collect();

    // Newest first; reference id breaks created-at ties deterministically.
    complaints.sort_by(|a, b| {
      (b.created_at, &b.reference_id).cmp(&(a.created_at, &a.reference_id))
    });
    Ok(complaints)
  }

  async fn update_complaint(
    &self,
    complaint: Complaint,
  ) -> Result<Option<Complaint>> {
    let mut complaints = write(&self.inner.complaints)?;
    if !complaints.contains_key(&complaint.complaint_id) {
      return Ok(None);
    }
    complaints.insert(complaint.complaint_id, complaint.clone());
    Ok(Some(complaint))
  }

  // ── Suggestions ───────────────────────────────────────────────────────────

  async fn insert_suggestion(
    &self,
    suggestion: Suggestion,
  ) -> Result<Suggestion> {
    write(&self.inner.suggestions)?
      .insert(suggestion.suggestion_id, suggestion.clone());
    Ok(suggestion)
  }

  async fn get_suggestion(&self, id: Uuid) -> Result<Option<Suggestion>> {
    Ok(read(&self.inner.suggestions)?.get(&id).cloned())
  }

  async fn list_suggestions(&self) -> Result<Vec<Suggestion>> {
    let mut suggestions: Vec<Suggestion> = read(&self.inner.suggestions)?
      .values()
      .cloned()
      .collect();

    suggestions.sort_by(|a, b| {
      (b.created_at, b.suggestion_id).cmp(&(a.created_at, a.suggestion_id))
    });
    Ok(suggestions)
  }

  async fn update_suggestion(
    &self,
    suggestion: Suggestion,
  ) -> Result<Option<Suggestion>> {
    let mut suggestions = write(&self.inner.suggestions)?;
    if !suggestions.contains_key(&suggestion.suggestion_id) {
      return Ok(None);
    }
    suggestions.insert(suggestion.suggestion_id, suggestion.clone());
    Ok(Some(suggestion))
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn insert_user(&self, user: User) -> Result<User> {
    let mut users = write(&self.inner.users)?;

    if users.values().any(|u| u.username == user.username) {
      return Err(Error::DuplicateUsername(user.username));
    }

    users.insert(user.user_id, user.clone());
    Ok(user)
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    Ok(read(&self.inner.users)?.get(&id).cloned())
  }

  async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
    Ok(
      read(&self.inner.users)?
        .values()
        .find(|u| u.username == username)
        .cloned(),
    )
  }

  async fn update_user_password(
    &self,
    id: Uuid,
    password_hash: String,
  ) -> Result<Option<User>> {
    let mut users = write(&self.inner.users)?;
    match users.get_mut(&id) {
      Some(user) => {
        user.password_hash = password_hash;
        Ok(Some(user.clone()))
      }
      None => Ok(None),
    }
  }
}
