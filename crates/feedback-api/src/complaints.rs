//! Handlers for `/complaints` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`   | `/complaints` | All complaints, newest first |
//! | `POST`  | `/complaints` | Body: [`CreateComplaintBody`]; 201 + stored record |
//! | `GET`   | `/complaints/:reference_id` | Lookup by public tracking code |
//! | `PATCH` | `/complaints/:id/status` | Body: [`UpdateStatusBody`] |
//! | `GET`   | `/complaints/status/:status` | Filter by status |
//! | `GET`   | `/complaints/category/:category` | Filter by category |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use feedback_core::{
  complaint::{Category, Complaint, ComplaintStatus, NewComplaint, Priority},
  lifecycle,
  store::{ComplaintFilter, FeedbackStore},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  ApiState,
  error::{ApiError, FieldError, store_err},
  validate::{optional_member, required_member, required_text},
};

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /complaints`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Complaint>>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let complaints = state
    .store
    .list_complaints(&ComplaintFilter::default())
    .await
    .map_err(store_err)?;
  Ok(Json(complaints))
}

/// `GET /complaints/status/:status`
pub async fn list_by_status<S>(
  State(state): State<ApiState<S>>,
  Path(status): Path<String>,
) -> Result<Json<Vec<Complaint>>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut errors = Vec::new();
  let status: Option<ComplaintStatus> =
    required_member(&mut errors, "status", Some(&status));
  let Some(status) = status else {
    return Err(ApiError::Validation(errors));
  };

  let complaints = state
    .store
    .list_complaints(&ComplaintFilter {
      status: Some(status),
      ..ComplaintFilter::default()
    })
    .await
    .map_err(store_err)?;
  Ok(Json(complaints))
}

/// `GET /complaints/category/:category`
pub async fn list_by_category<S>(
  State(state): State<ApiState<S>>,
  Path(category): Path<String>,
) -> Result<Json<Vec<Complaint>>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut errors = Vec::new();
  let category: Option<Category> =
    required_member(&mut errors, "category", Some(&category));
  let Some(category) = category else {
    return Err(ApiError::Validation(errors));
  };

  let complaints = state
    .store
    .list_complaints(&ComplaintFilter {
      category: Some(category),
      ..ComplaintFilter::default()
    })
    .await
    .map_err(store_err)?;
  Ok(Json(complaints))
}

// ─── Get by reference ────────────────────────────────────────────────────────

/// `GET /complaints/:reference_id`
pub async fn get_by_reference<S>(
  State(state): State<ApiState<S>>,
  Path(reference_id): Path<String>,
) -> Result<Json<Complaint>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let complaint = state
    .store
    .get_complaint_by_reference(&reference_id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| {
      ApiError::NotFound(format!("complaint {reference_id} not found"))
    })?;
  Ok(Json(complaint))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /complaints`.
///
/// Everything is optional at the serde level so that missing fields surface
/// as per-field validation errors instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintBody {
  pub subject:       Option<String>,
  pub description:   Option<String>,
  pub category:      Option<String>,
  pub priority:      Option<String>,
  pub contact_email: Option<String>,
}

/// `POST /complaints` — returns 201 + the stored complaint with its freshly
/// allocated reference ID.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<CreateComplaintBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut errors = Vec::new();
  let subject = required_text(&mut errors, "subject", body.subject.as_deref());
  let description =
    required_text(&mut errors, "description", body.description.as_deref());
  let category: Option<Category> =
    required_member(&mut errors, "category", body.category.as_deref());
  let priority: Option<Priority> =
    optional_member(&mut errors, "priority", body.priority.as_deref());

  let (Some(subject), Some(description), Some(category)) =
    (subject, description, category)
  else {
    return Err(ApiError::Validation(errors));
  };
  if !errors.is_empty() {
    return Err(ApiError::Validation(errors));
  }

  let complaint = Complaint::new(
    NewComplaint {
      subject,
      description,
      category,
      priority: priority.unwrap_or_default(),
      contact_email: body.contact_email.filter(|e| !e.trim().is_empty()),
    },
    state.refs.allocate(),
    Utc::now(),
  );

  let stored = state
    .store
    .insert_complaint(complaint)
    .await
    .map_err(store_err)?;
  Ok((StatusCode::CREATED, Json(stored)))
}

// ─── Status update ───────────────────────────────────────────────────────────

/// JSON body accepted by `PATCH /complaints/:id/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
  pub status:     Option<String>,
  pub resolution: Option<String>,
}

/// `PATCH /complaints/:id/status`
///
/// Invalid transitions (e.g. out of `resolved`) come back as a field error on
/// `status`; an unknown id is a 404.
pub async fn update_status<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<UpdateStatusBody>,
) -> Result<Json<Complaint>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut errors = Vec::new();
  let status: Option<ComplaintStatus> =
    required_member(&mut errors, "status", body.status.as_deref());
  let Some(status) = status else {
    return Err(ApiError::Validation(errors));
  };

  let mut complaint = state
    .store
    .get_complaint(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("complaint {id} not found")))?;

  lifecycle::apply_complaint_status(
    &mut complaint,
    status,
    body.resolution,
    Utc::now(),
  )
  .map_err(|e| ApiError::Validation(vec![FieldError::new("status", e.to_string())]))?;

  let updated = state
    .store
    .update_complaint(complaint)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("complaint {id} not found")))?;
  Ok(Json(updated))
}
