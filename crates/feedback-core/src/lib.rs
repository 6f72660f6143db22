//! Core types and trait definitions for the campus feedback platform.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod complaint;
pub mod error;
pub mod lifecycle;
pub mod reference;
pub mod stats;
pub mod store;
pub mod suggestion;
pub mod user;

pub use error::{Error, Result};
