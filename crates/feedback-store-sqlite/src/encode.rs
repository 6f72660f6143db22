//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings, so nothing downstream ever
//! branches on a timestamp's shape. Enumerations use their wire spellings.
//! UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use feedback_core::{
  complaint::Complaint, suggestion::Suggestion, user::User,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String {
  id.hyphenated().to_string()
}

pub fn decode_uuid(s: &str) -> Result<Uuid> {
  Ok(Uuid::parse_str(s)?)
}

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `complaints` row.
pub struct RawComplaint {
  pub complaint_id:  String,
  pub reference_id:  String,
  pub subject:       String,
  pub description:   String,
  pub category:      String,
  pub priority:      String,
  pub status:        String,
  pub contact_email: Option<String>,
  pub assigned_to:   Option<String>,
  pub resolution:    Option<String>,
  pub created_at:    String,
  pub updated_at:    String,
  pub resolved_at:   Option<String>,
}

impl RawComplaint {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      complaint_id:  row.get(0)?,
      reference_id:  row.get(1)?,
      subject:       row.get(2)?,
      description:   row.get(3)?,
      category:      row.get(4)?,
      priority:      row.get(5)?,
      status:        row.get(6)?,
      contact_email: row.get(7)?,
      assigned_to:   row.get(8)?,
      resolution:    row.get(9)?,
      created_at:    row.get(10)?,
      updated_at:    row.get(11)?,
      resolved_at:   row.get(12)?,
    })
  }

  pub fn into_complaint(self) -> Result<Complaint> {
    Ok(Complaint {
      complaint_id:  decode_uuid(&self.complaint_id)?,
      reference_id:  self.reference_id,
      subject:       self.subject,
      description:   self.description,
      category:      self.category.parse().map_err(Error::Core)?,
      priority:      self.priority.parse().map_err(Error::Core)?,
      status:        self.status.parse().map_err(Error::Core)?,
      contact_email: self.contact_email,
      assigned_to:   self.assigned_to,
      resolution:    self.resolution,
      created_at:    decode_dt(&self.created_at)?,
      updated_at:    decode_dt(&self.updated_at)?,
      resolved_at:   self.resolved_at.as_deref().map(decode_dt).transpose()?,
    })
  }
}

/// Raw strings read directly from a `suggestions` row.
pub struct RawSuggestion {
  pub suggestion_id: String,
  pub title:         String,
  pub kind:          String,
  pub description:   String,
  pub benefits:      Option<String>,
  pub status:        String,
  pub created_at:    String,
  pub updated_at:    String,
}

impl RawSuggestion {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      suggestion_id: row.get(0)?,
      title:         row.get(1)?,
      kind:          row.get(2)?,
      description:   row.get(3)?,
      benefits:      row.get(4)?,
      status:        row.get(5)?,
      created_at:    row.get(6)?,
      updated_at:    row.get(7)?,
    })
  }

  pub fn into_suggestion(self) -> Result<Suggestion> {
    Ok(Suggestion {
      suggestion_id: decode_uuid(&self.suggestion_id)?,
      title:         self.title,
      kind:          self.kind.parse().map_err(Error::Core)?,
      description:   self.description,
      benefits:      self.benefits,
      status:        self.status.parse().map_err(Error::Core)?,
      created_at:    decode_dt(&self.created_at)?,
      updated_at:    decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:       String,
  pub username:      String,
  pub password_hash: String,
  pub created_at:    String,
}

impl RawUser {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:       row.get(0)?,
      username:      row.get(1)?,
      password_hash: row.get(2)?,
      created_at:    row.get(3)?,
    })
  }

  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:       decode_uuid(&self.user_id)?,
      username:      self.username,
      password_hash: self.password_hash,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}
