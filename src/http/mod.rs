//! HTTP adapter
//!
//! Depends only on core/.
//!
//! Exposes the café lookup and a health check via the Axum web
//! framework. Responses on `/cafe` are plain text.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::router;
