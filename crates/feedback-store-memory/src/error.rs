//! Error type for `feedback-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("username already taken: {0:?}")]
  DuplicateUsername(String),

  #[error("reference id already taken: {0:?}")]
  DuplicateReference(String),

  /// A writer panicked while holding the map lock.
  #[error("store lock poisoned")]
  Poisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
