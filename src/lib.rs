//! Café finder - per-city café listings over HTTP
//!
//! Answers `GET /cafe?city=<key>[&count=<n>][&search=<text>]` with the
//! matching café names joined by commas, served from an immutable
//! in-memory catalog.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - catalog, query, search
//!   - config, error, types, xdg
//!   - services (unified service container)
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, error mapping, middleware, router

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// Re-export commonly used types for convenience
pub use core::catalog::{Cafe, Catalog};
pub use core::config::Config;
pub use core::error::{CafeError, Result};
pub use core::query::CafeQuery;
pub use core::search::CafeSearch;
pub use core::services::Services;
