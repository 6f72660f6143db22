//! Status workflows for complaints and suggestions.
//!
//! The transition tables are enforced here with typed errors rather than
//! trusting client-side discipline. Transitions are forward-only; re-asserting
//! the current status is permitted and changes nothing but `updated_at`, so
//! repeated admin clicks stay idempotent.

use chrono::{DateTime, Utc};

use crate::{
  complaint::{Complaint, ComplaintStatus},
  error::{Error, Result},
  suggestion::{Suggestion, SuggestionStatus},
};

// ─── Complaints ──────────────────────────────────────────────────────────────

impl ComplaintStatus {
  /// Whether the workflow permits moving from `self` to `target`.
  ///
  /// The direct `pending → resolved` jump is allowed; the admin UI never
  /// offers it, but the update operation has always accepted it.
  pub fn can_transition_to(self, target: Self) -> bool {
    use ComplaintStatus::{Pending, Resolved, UnderReview};
    match (self, target) {
      (a, b) if a == b => true,
      (Pending, UnderReview | Resolved) => true,
      (UnderReview, Resolved) => true,
      _ => false,
    }
  }
}

/// Apply a status update to a complaint in place.
///
/// Side effects:
/// - `updated_at` is always refreshed from `now`.
/// - Entering `resolved` stores the caller-supplied resolution (if any) and
///   stamps `resolved_at` exactly once. A missing resolution still succeeds —
///   the store layer has never required one.
pub fn apply_complaint_status(
  complaint: &mut Complaint,
  target: ComplaintStatus,
  resolution: Option<String>,
  now: DateTime<Utc>,
) -> Result<()> {
  if !complaint.status.can_transition_to(target) {
    return Err(Error::InvalidComplaintTransition {
      from: complaint.status,
      to:   target,
    });
  }

  if target == ComplaintStatus::Resolved {
    if let Some(text) = resolution {
      complaint.resolution = Some(text);
    }
    if complaint.resolved_at.is_none() {
      complaint.resolved_at = Some(now);
    }
  }

  complaint.status = target;
  complaint.updated_at = now;
  Ok(())
}

// ─── Suggestions ─────────────────────────────────────────────────────────────

impl SuggestionStatus {
  pub fn can_transition_to(self, target: Self) -> bool {
    use SuggestionStatus::{
      Approved, Implemented, Pending, Rejected, UnderReview,
    };
    match (self, target) {
      (a, b) if a == b => true,
      (Pending, UnderReview) => true,
      (UnderReview, Approved | Rejected) => true,
      (Approved, Implemented) => true,
      _ => false,
    }
  }
}

/// Apply a status update to a suggestion in place. Only `status` and
/// `updated_at` ever change.
pub fn apply_suggestion_status(
  suggestion: &mut Suggestion,
  target: SuggestionStatus,
  now: DateTime<Utc>,
) -> Result<()> {
  if !suggestion.status.can_transition_to(target) {
    return Err(Error::InvalidSuggestionTransition {
      from: suggestion.status,
      to:   target,
    });
  }

  suggestion.status = target;
  suggestion.updated_at = now;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    complaint::{Category, NewComplaint, Priority},
    suggestion::{NewSuggestion, SuggestionType},
  };

  fn complaint() -> Complaint {
    Complaint::new(
      NewComplaint {
        subject:       "A/C broken".into(),
        description:   "too hot".into(),
        category:      Category::Facilities,
        priority:      Priority::default(),
        contact_email: None,
      },
      "REF-2024-0001".into(),
      Utc::now(),
    )
  }

  fn suggestion() -> Suggestion {
    Suggestion::new(
      NewSuggestion {
        title:       "Bike racks".into(),
        kind:        SuggestionType::Improvement,
        description: "Near the library".into(),
        benefits:    None,
      },
      Utc::now(),
    )
  }

  #[test]
  fn full_complaint_progression() {
    let mut c = complaint();
    let created = c.created_at;

    apply_complaint_status(&mut c, ComplaintStatus::UnderReview, None, Utc::now())
      .unwrap();
    assert_eq!(c.status, ComplaintStatus::UnderReview);
    assert!(c.resolved_at.is_none());

    apply_complaint_status(
      &mut c,
      ComplaintStatus::Resolved,
      Some("fixed".into()),
      Utc::now(),
    )
    .unwrap();
    assert_eq!(c.status, ComplaintStatus::Resolved);
    assert_eq!(c.resolution.as_deref(), Some("fixed"));
    assert!(c.resolved_at.is_some());
    assert!(c.updated_at > created);
  }

  #[test]
  fn resolved_is_terminal() {
    let mut c = complaint();
    apply_complaint_status(
      &mut c,
      ComplaintStatus::Resolved,
      Some("done".into()),
      Utc::now(),
    )
    .unwrap();

    let err = apply_complaint_status(
      &mut c,
      ComplaintStatus::Pending,
      None,
      Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidComplaintTransition { .. }));
  }

  #[test]
  fn resolving_without_resolution_text_succeeds() {
    let mut c = complaint();
    apply_complaint_status(&mut c, ComplaintStatus::Resolved, None, Utc::now())
      .unwrap();
    assert_eq!(c.status, ComplaintStatus::Resolved);
    assert!(c.resolution.is_none());
    assert!(c.resolved_at.is_some());
  }

  #[test]
  fn reapplying_resolved_keeps_resolved_at() {
    let mut c = complaint();
    apply_complaint_status(
      &mut c,
      ComplaintStatus::Resolved,
      Some("fixed".into()),
      Utc::now(),
    )
    .unwrap();
    let first_resolved_at = c.resolved_at;

    apply_complaint_status(&mut c, ComplaintStatus::Resolved, None, Utc::now())
      .unwrap();
    assert_eq!(c.resolved_at, first_resolved_at);
    assert_eq!(c.resolution.as_deref(), Some("fixed"));
  }

  #[test]
  fn same_status_reapply_only_touches_updated_at() {
    let mut c = complaint();
    let before = c.clone();

    apply_complaint_status(&mut c, ComplaintStatus::Pending, None, Utc::now())
      .unwrap();
    assert_eq!(c.status, before.status);
    assert_eq!(c.resolution, before.resolution);
    assert_eq!(c.resolved_at, before.resolved_at);
    assert!(c.updated_at >= before.updated_at);
  }

  #[test]
  fn suggestion_branching_progression() {
    let mut s = suggestion();
    apply_suggestion_status(&mut s, SuggestionStatus::UnderReview, Utc::now())
      .unwrap();
    apply_suggestion_status(&mut s, SuggestionStatus::Approved, Utc::now())
      .unwrap();
    apply_suggestion_status(&mut s, SuggestionStatus::Implemented, Utc::now())
      .unwrap();
    assert_eq!(s.status, SuggestionStatus::Implemented);
  }

  #[test]
  fn rejected_is_terminal() {
    let mut s = suggestion();
    apply_suggestion_status(&mut s, SuggestionStatus::UnderReview, Utc::now())
      .unwrap();
    apply_suggestion_status(&mut s, SuggestionStatus::Rejected, Utc::now())
      .unwrap();

    let err =
      apply_suggestion_status(&mut s, SuggestionStatus::Approved, Utc::now())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSuggestionTransition { .. }));
  }

  #[test]
  fn pending_cannot_skip_to_approved() {
    let mut s = suggestion();
    let err =
      apply_suggestion_status(&mut s, SuggestionStatus::Approved, Utc::now())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSuggestionTransition { .. }));
  }
}
