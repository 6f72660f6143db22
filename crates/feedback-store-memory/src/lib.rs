//! In-memory backend for the feedback store.
//!
//! Used for tests and development runs. Nothing survives a restart; the
//! server re-bootstraps the admin user and reseeds the reference allocator on
//! every start.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;
