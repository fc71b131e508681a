//! Unified service container for the café finder
//!
//! Provides shared access to the catalog-backed services.

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::CafeSearch;
use std::sync::Arc;

/// Unified services container
///
/// Built once at startup and handed to the HTTP adapter as shared
/// state. Nothing in it is mutated after construction.
#[derive(Debug, Clone)]
pub struct Services {
    /// City → café catalog
    pub catalog: Arc<Catalog>,

    /// Query pipeline over the catalog
    pub search: Arc<CafeSearch>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services around an already built catalog
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let search = Arc::new(CafeSearch::new(Arc::clone(&catalog)));

        Self {
            catalog,
            search,
            config: Arc::new(config),
        }
    }

    /// Create services, loading the catalog named by the configuration
    ///
    /// Falls back to the built-in catalog when no path is configured.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::builtin(),
        };
        catalog.log_summary();

        Ok(Self::new(config, catalog))
    }
}
