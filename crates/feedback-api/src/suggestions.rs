//! Handlers for `/suggestions` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`   | `/suggestions` | All suggestions, newest first |
//! | `POST`  | `/suggestions` | Body: [`CreateSuggestionBody`]; 201 + stored record |
//! | `PATCH` | `/suggestions/:id/status` | Body: `{"status":"..."}` |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use feedback_core::{
  lifecycle,
  store::FeedbackStore,
  suggestion::{NewSuggestion, Suggestion, SuggestionStatus, SuggestionType},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  ApiState,
  error::{ApiError, FieldError, store_err},
  validate::{required_member, required_text},
};

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /suggestions`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Suggestion>>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let suggestions = state.store.list_suggestions().await.map_err(store_err)?;
  Ok(Json(suggestions))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /suggestions`.
#[derive(Debug, Deserialize)]
pub struct CreateSuggestionBody {
  pub title:       Option<String>,
  #[serde(rename = "type")]
  pub kind:        Option<String>,
  pub description: Option<String>,
  pub benefits:    Option<String>,
}

/// `POST /suggestions` — returns 201 + the stored suggestion.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<CreateSuggestionBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut errors = Vec::new();
  let title = required_text(&mut errors, "title", body.title.as_deref());
  let kind: Option<SuggestionType> =
    required_member(&mut errors, "type", body.kind.as_deref());
  let description =
    required_text(&mut errors, "description", body.description.as_deref());

  let (Some(title), Some(kind), Some(description)) = (title, kind, description)
  else {
    return Err(ApiError::Validation(errors));
  };

  let suggestion = Suggestion::new(
    NewSuggestion {
      title,
      kind,
      description,
      benefits: body.benefits.filter(|b| !b.trim().is_empty()),
    },
    Utc::now(),
  );

  let stored = state
    .store
    .insert_suggestion(suggestion)
    .await
    .map_err(store_err)?;
  Ok((StatusCode::CREATED, Json(stored)))
}

// ─── Status update ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
  pub status: Option<String>,
}

/// `PATCH /suggestions/:id/status`
pub async fn update_status<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<UpdateStatusBody>,
) -> Result<Json<Suggestion>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut errors = Vec::new();
  let status: Option<SuggestionStatus> =
    required_member(&mut errors, "status", body.status.as_deref());
  let Some(status) = status else {
    return Err(ApiError::Validation(errors));
  };

  let mut suggestion = state
    .store
    .get_suggestion(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("suggestion {id} not found")))?;

  lifecycle::apply_suggestion_status(&mut suggestion, status, Utc::now())
    .map_err(|e| {
      ApiError::Validation(vec![FieldError::new("status", e.to_string())])
    })?;

  let updated = state
    .store
    .update_suggestion(suggestion)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("suggestion {id} not found")))?;
  Ok(Json(updated))
}
