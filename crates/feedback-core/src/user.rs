//! Administrator accounts.
//!
//! Users triage complaints; they are created at bootstrap (a single default
//! admin) or by an administrative add-user action, and only ever mutated by
//! password change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user account.
///
/// `password_hash` is an argon2 PHC string and never serialises into API
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub user_id:       Uuid,
  /// Unique across all users.
  pub username:      String,
  #[serde(skip_serializing, default)]
  pub password_hash: String,
  pub created_at:    DateTime<Utc>,
}

impl User {
  pub fn new(
    username: impl Into<String>,
    password_hash: String,
    now: DateTime<Utc>,
  ) -> Self {
    Self {
      user_id: Uuid::new_v4(),
      username: username.into(),
      password_hash,
      created_at: now,
    }
  }
}
