//! Response payloads shared by the HTTP adapter.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,

    /// Number of cities in the loaded catalog
    pub cities: usize,
}
