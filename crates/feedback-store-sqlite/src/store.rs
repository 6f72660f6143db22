//! [`SqliteStore`] — the SQLite implementation of [`FeedbackStore`].

use std::path::Path;

use feedback_core::{
  complaint::Complaint,
  store::{ComplaintFilter, FeedbackStore},
  suggestion::Suggestion,
  user::User,
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawComplaint, RawSuggestion, RawUser, encode_dt, encode_uuid},
  schema::SCHEMA,
};

const COMPLAINT_COLUMNS: &str = "complaint_id, reference_id, subject, \
   description, category, priority, status, contact_email, assigned_to, \
   resolution, created_at, updated_at, resolved_at";

const SUGGESTION_COLUMNS: &str = "suggestion_id, title, kind, description, \
   benefits, status, created_at, updated_at";

const USER_COLUMNS: &str = "user_id, username, password_hash, created_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A feedback store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── FeedbackStore impl ──────────────────────────────────────────────────────

impl FeedbackStore for SqliteStore {
  type Error = Error;

  // ── Complaints ────────────────────────────────────────────────────────────

  async fn insert_complaint(&self, complaint: Complaint) -> Result<Complaint> {
    let id_str       = encode_uuid(complaint.complaint_id);
    let reference    = complaint.reference_id.clone();
    let subject      = complaint.subject.clone();
    let description  = complaint.description.clone();
    let category     = complaint.category.as_str();
    let priority     = complaint.priority.as_str();
    let status       = complaint.status.as_str();
    let contact      = complaint.contact_email.clone();
    let assigned     = complaint.assigned_to.clone();
    let resolution   = complaint.resolution.clone();
    let created_str  = encode_dt(complaint.created_at);
    let updated_str  = encode_dt(complaint.updated_at);
    let resolved_str = complaint.resolved_at.map(encode_dt);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO complaints (
             complaint_id, reference_id, subject, description, category,
             priority, status, contact_email, assigned_to, resolution,
             created_at, updated_at, resolved_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
          rusqlite::params![
            id_str,
            reference,
            subject,
            description,
            category,
            priority,
            status,
            contact,
            assigned,
            resolution,
            created_str,
            updated_str,
            resolved_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(complaint)
  }

  async fn get_complaint(&self, id: Uuid) -> Result<Option<Complaint>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawComplaint> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {COMPLAINT_COLUMNS} FROM complaints
                 WHERE complaint_id = ?1"
              ),
              rusqlite::params![id_str],
              RawComplaint::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawComplaint::into_complaint).transpose()
  }

  async fn get_complaint_by_reference(
    &self,
    reference_id: &str,
  ) -> Result<Option<Complaint>> {
    let reference = reference_id.to_owned();

    let raw: Option<RawComplaint> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {COMPLAINT_COLUMNS} FROM complaints
                 WHERE reference_id = ?1"
              ),
              rusqlite::params![reference],
              RawComplaint::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawComplaint::into_complaint).transpose()
  }

  async fn list_complaints(
    &self,
    filter: &ComplaintFilter,
  ) -> Result<Vec<Complaint>> {
    let status_str   = filter.status.map(|s| s.as_str().to_owned());
    let category_str = filter.category.map(|c| c.as_str().to_owned());

    let raws: Vec<RawComplaint> = self
      .conn
      .call(move |conn| {
        let order = "ORDER BY created_at DESC, reference_id DESC";
        let rows = match (status_str, category_str) {
          (Some(status), Some(category)) => {
            let mut stmt = conn.prepare(&format!(
              "SELECT {COMPLAINT_COLUMNS} FROM complaints
               WHERE status = ?1 AND category = ?2 {order}"
            ))?;
            stmt
              .query_map(
                rusqlite::params![status, category],
                RawComplaint::from_row,
              )?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          (Some(status), None) => {
            let mut stmt = conn.prepare(&format!(
              "SELECT {COMPLAINT_COLUMNS} FROM complaints
               WHERE status = ?1 {order}"
            ))?;
            stmt
              .query_map(rusqlite::params![status], RawComplaint::from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          (None, Some(category)) => {
            let mut stmt = conn.prepare(&format!(
              "SELECT {COMPLAINT_COLUMNS} FROM complaints
               WHERE category = ?1 {order}"
            ))?;
            stmt
              .query_map(rusqlite::params![category], RawComplaint::from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          (None, None) => {
            let mut stmt = conn.prepare(&format!(
              "SELECT {COMPLAINT_COLUMNS} FROM complaints {order}"
            ))?;
            stmt
              .query_map([], RawComplaint::from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawComplaint::into_complaint).collect()
  }

  async fn update_complaint(
    &self,
    complaint: Complaint,
  ) -> Result<Option<Complaint>> {
    let id_str       = encode_uuid(complaint.complaint_id);
    let subject      = complaint.subject.clone();
    let description  = complaint.description.clone();
    let category     = complaint.category.as_str();
    let priority     = complaint.priority.as_str();
    let status       = complaint.status.as_str();
    let contact      = complaint.contact_email.clone();
    let assigned     = complaint.assigned_to.clone();
    let resolution   = complaint.resolution.clone();
    let updated_str  = encode_dt(complaint.updated_at);
    let resolved_str = complaint.resolved_at.map(encode_dt);

    // reference_id and created_at are immutable and deliberately absent here.
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE complaints SET
             subject = ?1, description = ?2, category = ?3, priority = ?4,
             status = ?5, contact_email = ?6, assigned_to = ?7,
             resolution = ?8, updated_at = ?9, resolved_at = ?10
           WHERE complaint_id = ?11",
          rusqlite::params![
            subject,
            description,
            category,
            priority,
            status,
            contact,
            assigned,
            resolution,
            updated_str,
            resolved_str,
            id_str,
          ],
        )?)
      })
      .await?;

    Ok((affected > 0).then_some(complaint))
  }

  // ── Suggestions ───────────────────────────────────────────────────────────

  async fn insert_suggestion(
    &self,
    suggestion: Suggestion,
  ) -> Result<Suggestion> {
    let id_str      = encode_uuid(suggestion.suggestion_id);
    let title       = suggestion.title.clone();
    let kind        = suggestion.kind.as_str();
    let description = suggestion.description.clone();
    let benefits    = suggestion.benefits.clone();
    let status      = suggestion.status.as_str();
    let created_str = encode_dt(suggestion.created_at);
    let updated_str = encode_dt(suggestion.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO suggestions (
             suggestion_id, title, kind, description, benefits, status,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            title,
            kind,
            description,
            benefits,
            status,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(suggestion)
  }

  async fn get_suggestion(&self, id: Uuid) -> Result<Option<Suggestion>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawSuggestion> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {SUGGESTION_COLUMNS} FROM suggestions
                 WHERE suggestion_id = ?1"
              ),
              rusqlite::params![id_str],
              RawSuggestion::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSuggestion::into_suggestion).transpose()
  }

  async fn list_suggestions(&self) -> Result<Vec<Suggestion>> {
    let raws: Vec<RawSuggestion> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SUGGESTION_COLUMNS} FROM suggestions
           ORDER BY created_at DESC, suggestion_id DESC"
        ))?;
        let rows = stmt
          .query_map([], RawSuggestion::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawSuggestion::into_suggestion)
      .collect()
  }

  async fn update_suggestion(
    &self,
    suggestion: Suggestion,
  ) -> Result<Option<Suggestion>> {
    let id_str      = encode_uuid(suggestion.suggestion_id);
    let title       = suggestion.title.clone();
    let kind        = suggestion.kind.as_str();
    let description = suggestion.description.clone();
    let benefits    = suggestion.benefits.clone();
    let status      = suggestion.status.as_str();
    let updated_str = encode_dt(suggestion.updated_at);

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE suggestions SET
             title = ?1, kind = ?2, description = ?3, benefits = ?4,
             status = ?5, updated_at = ?6
           WHERE suggestion_id = ?7",
          rusqlite::params![
            title,
            kind,
            description,
            benefits,
            status,
            updated_str,
            id_str,
          ],
        )?)
      })
      .await?;

    Ok((affected > 0).then_some(suggestion))
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn insert_user(&self, user: User) -> Result<User> {
    let id_str      = encode_uuid(user.user_id);
    let username    = user.username.clone();
    let hash        = user.password_hash.clone();
    let created_str = encode_dt(user.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_id, username, password_hash, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, username, hash, created_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(user)
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = ?1"),
              rusqlite::params![id_str],
              RawUser::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
    let username = username.to_owned();

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1"),
              rusqlite::params![username],
              RawUser::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn update_user_password(
    &self,
    id: Uuid,
    password_hash: String,
  ) -> Result<Option<User>> {
    let id_str = encode_uuid(id);

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE users SET password_hash = ?1 WHERE user_id = ?2",
          rusqlite::params![password_hash, id_str],
        )?)
      })
      .await?;

    if affected == 0 {
      return Ok(None);
    }
    self.get_user(id).await
  }
}
