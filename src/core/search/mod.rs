//! Café search over the in-memory catalog.
//!
//! This module provides the lookup pipeline: validate the request,
//! fetch the city's cafés, filter by name, limit, and render the
//! comma-joined response body.

mod filter;
mod service;

pub use filter::{matches_name, render_names};
pub use service::CafeSearch;
