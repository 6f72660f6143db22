//! Handlers for `/auth` endpoints, plus argon2 helpers shared with the
//! server binary.
//!
//! Credentials are verified against argon2 PHC strings; a failed login is
//! always the same generic rejection, whichever factor mismatched.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use axum::{Json, extract::State};
use feedback_core::store::FeedbackStore;
use rand_core::OsRng;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
  ApiState,
  error::{ApiError, FieldError, store_err},
  validate::required_text,
};

// ─── Hashing helpers ─────────────────────────────────────────────────────────

/// Hash a password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
  let salt = SaltString::generate(&mut OsRng);
  Ok(
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)?
      .to_string(),
  )
}

/// Verify a password against a stored PHC string.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(stored_hash) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub username: Option<String>,
  pub password: Option<String>,
}

/// `POST /auth/login` — body: `{"username":"...","password":"..."}`.
///
/// Returns `{"user": {...}}` on success (the password hash never serialises);
/// any failure is a uniform 401.
pub async fn login<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (Some(username), Some(password)) = (body.username, body.password) else {
    return Err(ApiError::Unauthorized);
  };

  let user = state
    .store
    .get_user_by_username(&username)
    .await
    .map_err(store_err)?
    .ok_or(ApiError::Unauthorized)?;

  if !verify_password(&password, &user.password_hash) {
    return Err(ApiError::Unauthorized);
  }

  Ok(Json(json!({ "user": user })))
}

// ─── Password change ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
  pub user_id:      Option<String>,
  pub new_password: Option<String>,
}

/// `PUT /auth/password` — body: `{"userId":"...","newPassword":"..."}`.
pub async fn change_password<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<ChangePasswordBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut errors = Vec::new();
  let new_password =
    required_text(&mut errors, "newPassword", body.new_password.as_deref());

  let user_id = match body.user_id.as_deref().map(Uuid::parse_str) {
    Some(Ok(id)) => Some(id),
    Some(Err(_)) => {
      errors.push(FieldError::new("userId", "must be a valid id"));
      None
    }
    None => {
      errors.push(FieldError::new("userId", "is required"));
      None
    }
  };

  let (Some(new_password), Some(user_id)) = (new_password, user_id) else {
    return Err(ApiError::Validation(errors));
  };

  let hash = hash_password(&new_password)
    .map_err(|e| ApiError::Store(format!("argon2: {e}").into()))?;

  let user = state
    .store
    .update_user_password(user_id, hash)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("user {user_id} not found")))?;

  Ok(Json(json!({ "user": user })))
}
