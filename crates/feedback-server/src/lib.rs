//! Server assembly for the campus feedback platform.
//!
//! Loads configuration, opens the configured storage backend, bootstraps the
//! default admin account, seeds the reference-ID allocator, and serves the
//! JSON API under `/api`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::Router;
use chrono::{Datelike as _, Utc};
use feedback_api::{ApiState, api_router, auth::hash_password};
use feedback_core::{
  reference::ReferenceAllocator,
  store::{ComplaintFilter, FeedbackStore},
  user::User,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Which storage backend to open at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
  Sqlite,
  /// Nothing survives a restart; for development only.
  Memory,
}

/// Runtime server configuration, deserialised from `config.toml` merged with
/// `FEEDBACK_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "defaults::host")]
  pub host:           String,
  #[serde(default = "defaults::port")]
  pub port:           u16,
  #[serde(default = "defaults::storage")]
  pub storage:        StorageBackend,
  #[serde(default = "defaults::store_path")]
  pub store_path:     PathBuf,
  #[serde(default = "defaults::admin_username")]
  pub admin_username: String,
  /// Plaintext only in configuration; hashed before it reaches the store.
  pub admin_password: String,
}

mod defaults {
  use std::path::PathBuf;

  use super::StorageBackend;

  pub fn host() -> String {
    "127.0.0.1".to_string()
  }

  pub fn port() -> u16 {
    8080
  }

  pub fn storage() -> StorageBackend {
    StorageBackend::Sqlite
  }

  pub fn store_path() -> PathBuf {
    PathBuf::from("feedback.db3")
  }

  pub fn admin_username() -> String {
    "admin".to_string()
  }
}

// ─── Startup tasks ───────────────────────────────────────────────────────────

/// Create the default admin account unless the username already exists.
pub async fn bootstrap_admin<S>(
  store: &S,
  username: &str,
  password: &str,
) -> anyhow::Result<()>
where
  S: FeedbackStore,
{
  let existing = store
    .get_user_by_username(username)
    .await
    .map_err(anyhow::Error::new)
    .context("failed to look up admin user")?;
  if existing.is_some() {
    return Ok(());
  }

  let hash = hash_password(password)
    .map_err(|e| anyhow::anyhow!("argon2 error: {e}"))?;
  store
    .insert_user(User::new(username, hash, Utc::now()))
    .await
    .map_err(anyhow::Error::new)
    .context("failed to create admin user")?;

  tracing::info!(username, "created default admin user");
  Ok(())
}

/// Seed the reference allocator from the highest stored sequence for the
/// current year.
pub async fn seed_allocator<S>(store: &S) -> anyhow::Result<ReferenceAllocator>
where
  S: FeedbackStore,
{
  let complaints = store
    .list_complaints(&ComplaintFilter::default())
    .await
    .map_err(anyhow::Error::new)
    .context("failed to scan complaints for reference seeding")?;

  let year = Utc::now().year();
  let refs = ReferenceAllocator::seed(
    year,
    complaints.iter().map(|c| c.reference_id.as_str()),
  );
  Ok(refs)
}

// ─── Serve ───────────────────────────────────────────────────────────────────

/// Run the platform on `store` until the process is stopped.
pub async fn serve<S>(store: S, config: &ServerConfig) -> anyhow::Result<()>
where
  S: FeedbackStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  bootstrap_admin(&store, &config.admin_username, &config.admin_password)
    .await?;
  let refs = seed_allocator(&store).await?;

  let state = ApiState {
    store: Arc::new(store),
    refs:  Arc::new(refs),
  };

  let app = Router::new()
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", config.host, config.port);
  tracing::info!("listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}
