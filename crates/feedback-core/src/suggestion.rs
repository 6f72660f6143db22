//! Suggestion — a proposal for improvement, with a simpler workflow than a
//! complaint: no reference code, no resolution text.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

// ─── Enumerations ────────────────────────────────────────────────────────────

/// What kind of change the suggestion proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
  Improvement,
  Service,
  Policy,
  Event,
  Technology,
  Other,
}

impl SuggestionType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Improvement => "improvement",
      Self::Service => "service",
      Self::Policy => "policy",
      Self::Event => "event",
      Self::Technology => "technology",
      Self::Other => "other",
    }
  }
}

impl FromStr for SuggestionType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "improvement" => Ok(Self::Improvement),
      "service" => Ok(Self::Service),
      "policy" => Ok(Self::Policy),
      "event" => Ok(Self::Event),
      "technology" => Ok(Self::Technology),
      "other" => Ok(Self::Other),
      other => Err(Error::UnknownSuggestionType(other.to_owned())),
    }
  }
}

impl fmt::Display for SuggestionType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Suggestion workflow state.
///
/// `pending → under_review → {approved → implemented, rejected}`;
/// `implemented` and `rejected` are terminal.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
  #[default]
  Pending,
  UnderReview,
  Approved,
  Implemented,
  Rejected,
}

impl SuggestionStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::UnderReview => "under_review",
      Self::Approved => "approved",
      Self::Implemented => "implemented",
      Self::Rejected => "rejected",
    }
  }
}

impl FromStr for SuggestionStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "pending" => Ok(Self::Pending),
      "under_review" => Ok(Self::UnderReview),
      "approved" => Ok(Self::Approved),
      "implemented" => Ok(Self::Implemented),
      "rejected" => Ok(Self::Rejected),
      other => Err(Error::UnknownSuggestionStatus(other.to_owned())),
    }
  }
}

impl fmt::Display for SuggestionStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A stored suggestion. Serialises camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
  pub suggestion_id: Uuid,
  pub title:         String,
  #[serde(rename = "type")]
  pub kind:          SuggestionType,
  pub description:   String,
  pub benefits:      Option<String>,
  pub status:        SuggestionStatus,
  pub created_at:    DateTime<Utc>,
  pub updated_at:    DateTime<Utc>,
}

/// Validated input for a new suggestion submission.
#[derive(Debug, Clone)]
pub struct NewSuggestion {
  pub title:       String,
  pub kind:        SuggestionType,
  pub description: String,
  pub benefits:    Option<String>,
}

impl Suggestion {
  pub fn new(input: NewSuggestion, now: DateTime<Utc>) -> Self {
    Self {
      suggestion_id: Uuid::new_v4(),
      title:         input.title,
      kind:          input.kind,
      description:   input.description,
      benefits:      input.benefits,
      status:        SuggestionStatus::Pending,
      created_at:    now,
      updated_at:    now,
    }
  }
}
