//! Catalog-backed café search service.

use crate::core::catalog::{Cafe, Catalog};
use crate::core::error::{CafeError, Result};
use crate::core::query::CafeQuery;
use crate::core::search::filter::{matches_name, render_names};
use std::sync::Arc;

/// Café search service
///
/// Holds a shared reference to the immutable catalog; every call is
/// independent and never mutates it.
#[derive(Debug, Clone)]
pub struct CafeSearch {
    catalog: Arc<Catalog>,
}

impl CafeSearch {
    /// Create a new search service
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Catalog backing this service
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a query to the matching cafés, in catalog order
    ///
    /// Validation order is fixed: an unknown city is reported before
    /// a malformed count.
    ///
    /// # Errors
    ///
    /// - `UnknownCity`: `city` is missing or not a catalog key
    /// - `InvalidCount`: `count` is present but not a non-negative integer
    pub fn search(&self, query: &CafeQuery) -> Result<Vec<&Cafe>> {
        let cafes = query
            .city
            .as_deref()
            .and_then(|city| self.catalog.cafes(city))
            .ok_or_else(|| CafeError::UnknownCity(query.city.clone()))?;

        let limit = query.limit()?.unwrap_or(usize::MAX);

        let results: Vec<&Cafe> = match query.search_text() {
            Some(text) => {
                let needle = text.to_lowercase();
                cafes
                    .iter()
                    .filter(|cafe| matches_name(cafe, &needle))
                    .take(limit)
                    .collect()
            }
            None => cafes.iter().take(limit).collect(),
        };

        Ok(results)
    }

    /// Resolve a query and render the plain-text response body
    pub fn list(&self, query: &CafeQuery) -> Result<String> {
        let cafes = self.search(query)?;
        Ok(render_names(&cafes))
    }
}
