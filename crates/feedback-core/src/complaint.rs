//! Complaint — the primary record of the feedback platform.
//!
//! A complaint is created once by an anonymous submission and afterwards only
//! mutated through status updates (see [`crate::lifecycle`]). It is never
//! deleted.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

// ─── Enumerations ────────────────────────────────────────────────────────────

/// Fixed category set shared by the server and client dashboards.
///
/// Wire spelling is kebab-case, e.g. `student-discipline`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
  Academics,
  Facilities,
  StudentDiscipline,
  TeachersStaff,
  ClubsActivities,
}

impl Category {
  pub const ALL: [Self; 5] = [
    Self::Academics,
    Self::Facilities,
    Self::StudentDiscipline,
    Self::TeachersStaff,
    Self::ClubsActivities,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Academics => "academics",
      Self::Facilities => "facilities",
      Self::StudentDiscipline => "student-discipline",
      Self::TeachersStaff => "teachers-staff",
      Self::ClubsActivities => "clubs-activities",
    }
  }
}

impl FromStr for Category {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "academics" => Ok(Self::Academics),
      "facilities" => Ok(Self::Facilities),
      "student-discipline" => Ok(Self::StudentDiscipline),
      "teachers-staff" => Ok(Self::TeachersStaff),
      "clubs-activities" => Ok(Self::ClubsActivities),
      other => Err(Error::UnknownCategory(other.to_owned())),
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Triage priority. Defaults to `medium` when the submitter leaves it blank.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  #[default]
  Medium,
  High,
  Urgent,
}

impl Priority {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
      Self::Urgent => "urgent",
    }
  }
}

impl FromStr for Priority {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "low" => Ok(Self::Low),
      "medium" => Ok(Self::Medium),
      "high" => Ok(Self::High),
      "urgent" => Ok(Self::Urgent),
      other => Err(Error::UnknownPriority(other.to_owned())),
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Complaint workflow state. Transitions are forward-only; see
/// [`crate::lifecycle`] for the transition table.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
  #[default]
  Pending,
  UnderReview,
  Resolved,
}

impl ComplaintStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::UnderReview => "under_review",
      Self::Resolved => "resolved",
    }
  }
}

impl FromStr for ComplaintStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "pending" => Ok(Self::Pending),
      "under_review" => Ok(Self::UnderReview),
      "resolved" => Ok(Self::Resolved),
      other => Err(Error::UnknownComplaintStatus(other.to_owned())),
    }
  }
}

impl fmt::Display for ComplaintStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A stored complaint. Serialises camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
  pub complaint_id:  Uuid,
  /// Human-readable tracking code, `REF-<year>-<seq>`. Unique and immutable.
  pub reference_id:  String,
  pub subject:       String,
  pub description:   String,
  pub category:      Category,
  pub priority:      Priority,
  pub status:        ComplaintStatus,
  pub contact_email: Option<String>,
  pub assigned_to:   Option<String>,
  /// Set when an administrator resolves the complaint.
  pub resolution:    Option<String>,
  pub created_at:    DateTime<Utc>,
  /// Bumped on every mutation.
  pub updated_at:    DateTime<Utc>,
  /// Non-null exactly when `status == Resolved`.
  pub resolved_at:   Option<DateTime<Utc>>,
}

/// Validated input for a new complaint submission.
#[derive(Debug, Clone)]
pub struct NewComplaint {
  pub subject:       String,
  pub description:   String,
  pub category:      Category,
  pub priority:      Priority,
  pub contact_email: Option<String>,
}

impl Complaint {
  /// Build a fresh pending complaint from validated input and an allocated
  /// reference ID.
  pub fn new(input: NewComplaint, reference_id: String, now: DateTime<Utc>) -> Self {
    Self {
      complaint_id:  Uuid::new_v4(),
      reference_id,
      subject:       input.subject,
      description:   input.description,
      category:      input.category,
      priority:      input.priority,
      status:        ComplaintStatus::Pending,
      contact_email: input.contact_email,
      assigned_to:   None,
      resolution:    None,
      created_at:    now,
      updated_at:    now,
      resolved_at:   None,
    }
  }
}
