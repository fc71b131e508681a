//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP transport.
//!
//! # Architecture
//!
//! - **catalog**: City → café records, built once at startup
//! - **query**: Raw request parameters and count parsing
//! - **search**: Lookup, name filtering, limiting and rendering
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Response payloads
//! - **xdg**: XDG directory handling
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use catalog::{Cafe, Catalog};
pub use config::Config;
pub use error::{CafeError, Result};
pub use query::CafeQuery;
pub use search::CafeSearch;
pub use services::Services;
