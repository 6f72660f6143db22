//! Error types for `feedback-core`.

use thiserror::Error;

use crate::{complaint::ComplaintStatus, suggestion::SuggestionStatus};

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown category: {0:?}")]
  UnknownCategory(String),

  #[error("unknown priority: {0:?}")]
  UnknownPriority(String),

  #[error("unknown complaint status: {0:?}")]
  UnknownComplaintStatus(String),

  #[error("unknown suggestion status: {0:?}")]
  UnknownSuggestionStatus(String),

  #[error("unknown suggestion type: {0:?}")]
  UnknownSuggestionType(String),

  #[error("cannot move complaint from {from} to {to}")]
  InvalidComplaintTransition {
    from: ComplaintStatus,
    to:   ComplaintStatus,
  },

  #[error("cannot move suggestion from {from} to {to}")]
  InvalidSuggestionTransition {
    from: SuggestionStatus,
    to:   SuggestionStatus,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
