//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::Utc;
use feedback_core::{
  complaint::{Category, Complaint, ComplaintStatus, NewComplaint, Priority},
  lifecycle,
  store::{ComplaintFilter, FeedbackStore},
  suggestion::{NewSuggestion, Suggestion, SuggestionStatus, SuggestionType},
  user::User,
};
use uuid::Uuid;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn complaint(reference: &str, category: Category) -> Complaint {
  Complaint::new(
    NewComplaint {
      subject:       "A/C broken".into(),
      description:   "too hot".into(),
      category,
      priority:      Priority::default(),
      contact_email: Some("student@campus.edu".into()),
    },
    reference.into(),
    Utc::now(),
  )
}

fn suggestion(title: &str) -> Suggestion {
  Suggestion::new(
    NewSuggestion {
      title:       title.into(),
      kind:        SuggestionType::Technology,
      description: "description".into(),
      benefits:    Some("benefits".into()),
    },
    Utc::now(),
  )
}

// ─── Complaints ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_complaint_roundtrip() {
  let s = store().await;
  let inserted = s
    .insert_complaint(complaint("REF-2024-0001", Category::Facilities))
    .await
    .unwrap();

  let fetched = s
    .get_complaint(inserted.complaint_id)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fetched.reference_id, "REF-2024-0001");
  assert_eq!(fetched.subject, "A/C broken");
  assert_eq!(fetched.category, Category::Facilities);
  assert_eq!(fetched.priority, Priority::Medium);
  assert_eq!(fetched.status, ComplaintStatus::Pending);
  assert_eq!(fetched.contact_email.as_deref(), Some("student@campus.edu"));
  assert!(fetched.resolved_at.is_none());
}

#[tokio::test]
async fn get_complaint_by_reference() {
  let s = store().await;
  let inserted = s
    .insert_complaint(complaint("REF-2024-0002", Category::Academics))
    .await
    .unwrap();

  let fetched = s
    .get_complaint_by_reference("REF-2024-0002")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fetched.complaint_id, inserted.complaint_id);

  assert!(
    s.get_complaint_by_reference("REF-2024-9999")
      .await
      .unwrap()
      .is_none()
  );
}

#[tokio::test]
async fn get_complaint_missing_returns_none() {
  let s = store().await;
  assert!(s.get_complaint(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_reference_is_a_database_error() {
  let s = store().await;
  s.insert_complaint(complaint("REF-2024-0001", Category::Facilities))
    .await
    .unwrap();

  let result: Result<_, <SqliteStore as FeedbackStore>::Error> = s
    .insert_complaint(complaint("REF-2024-0001", Category::Academics))
    .await;
  assert!(matches!(result, Err(Error::Database(_))));
}

#[tokio::test]
async fn list_complaints_with_filters() {
  let s = store().await;
  s.insert_complaint(complaint("REF-2024-0001", Category::Facilities))
    .await
    .unwrap();

  let mut reviewed = complaint("REF-2024-0002", Category::Academics);
  lifecycle::apply_complaint_status(
    &mut reviewed,
    ComplaintStatus::UnderReview,
    None,
    Utc::now(),
  )
  .unwrap();
  s.insert_complaint(reviewed).await.unwrap();

  let all = s.list_complaints(&ComplaintFilter::default()).await.unwrap();
  assert_eq!(all.len(), 2);

  let under_review = s
    .list_complaints(&ComplaintFilter {
      status: Some(ComplaintStatus::UnderReview),
      ..ComplaintFilter::default()
    })
    .await
    .unwrap();
  assert_eq!(under_review.len(), 1);
  assert_eq!(under_review[0].reference_id, "REF-2024-0002");

  let facilities = s
    .list_complaints(&ComplaintFilter {
      category: Some(Category::Facilities),
      ..ComplaintFilter::default()
    })
    .await
    .unwrap();
  assert_eq!(facilities.len(), 1);

  let both = s
    .list_complaints(&ComplaintFilter {
      status:   Some(ComplaintStatus::UnderReview),
      category: Some(Category::Academics),
    })
    .await
    .unwrap();
  assert_eq!(both.len(), 1);
}

#[tokio::test]
async fn update_complaint_persists_resolution_fields() {
  let s = store().await;
  let mut stored = s
    .insert_complaint(complaint("REF-2024-0001", Category::Facilities))
    .await
    .unwrap();

  lifecycle::apply_complaint_status(
    &mut stored,
    ComplaintStatus::Resolved,
    Some("fixed".into()),
    Utc::now(),
  )
  .unwrap();
  s.update_complaint(stored.clone()).await.unwrap().unwrap();

  let fetched = s
    .get_complaint(stored.complaint_id)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fetched.status, ComplaintStatus::Resolved);
  assert_eq!(fetched.resolution.as_deref(), Some("fixed"));
  assert!(fetched.resolved_at.is_some());
  assert!(fetched.updated_at >= fetched.created_at);
}

#[tokio::test]
async fn update_missing_complaint_returns_none() {
  let s = store().await;
  let orphan = complaint("REF-2024-0001", Category::Facilities);
  assert!(s.update_complaint(orphan).await.unwrap().is_none());
}

// ─── Suggestions ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn suggestion_roundtrip_and_status_update() {
  let s = store().await;
  let mut stored = s.insert_suggestion(suggestion("Campus app")).await.unwrap();

  let fetched = s
    .get_suggestion(stored.suggestion_id)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fetched.title, "Campus app");
  assert_eq!(fetched.kind, SuggestionType::Technology);
  assert_eq!(fetched.benefits.as_deref(), Some("benefits"));

  lifecycle::apply_suggestion_status(
    &mut stored,
    SuggestionStatus::UnderReview,
    Utc::now(),
  )
  .unwrap();
  s.update_suggestion(stored.clone()).await.unwrap().unwrap();

  let fetched = s
    .get_suggestion(stored.suggestion_id)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fetched.status, SuggestionStatus::UnderReview);
}

#[tokio::test]
async fn update_missing_suggestion_returns_none() {
  let s = store().await;
  assert!(s.update_suggestion(suggestion("orphan")).await.unwrap().is_none());
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn user_roundtrip_and_password_update() {
  let s = store().await;
  let user = s
    .insert_user(User::new("admin", "$argon2$old".into(), Utc::now()))
    .await
    .unwrap();

  let fetched = s.get_user_by_username("admin").await.unwrap().unwrap();
  assert_eq!(fetched.user_id, user.user_id);
  assert_eq!(fetched.password_hash, "$argon2$old");

  let updated = s
    .update_user_password(user.user_id, "$argon2$new".into())
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.password_hash, "$argon2$new");

  assert!(
    s.update_user_password(Uuid::new_v4(), "x".into())
      .await
      .unwrap()
      .is_none()
  );
}

#[tokio::test]
async fn duplicate_username_is_a_database_error() {
  let s = store().await;
  s.insert_user(User::new("admin", "hash".into(), Utc::now()))
    .await
    .unwrap();

  let result = s
    .insert_user(User::new("admin", "other".into(), Utc::now()))
    .await;
  assert!(matches!(result, Err(Error::Database(_))));
}
