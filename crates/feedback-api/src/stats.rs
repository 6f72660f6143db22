//! Handler for `GET /stats` — dashboard aggregates.

use axum::{Json, extract::State};
use feedback_core::{
  stats::ComplaintStats,
  store::{ComplaintFilter, FeedbackStore},
};

use crate::{ApiState, error::{ApiError, store_err}};

/// `GET /stats`
///
/// A full scan of the complaint collection on every call; cheap at campus
/// scale.
pub async fn overview<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<ComplaintStats>, ApiError>
where
  S: FeedbackStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let complaints = state
    .store
    .list_complaints(&ComplaintFilter::default())
    .await
    .map_err(store_err)?;
  Ok(Json(ComplaintStats::compute(&complaints)))
}
