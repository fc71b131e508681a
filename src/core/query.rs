//! Request parameters for café lookups
//!
//! Parameters arrive as decoded query-string pairs. They are kept as
//! raw text here; validation happens in [`CafeSearch`] so that the
//! city check always runs before the count check.
//!
//! [`CafeSearch`]: crate::core::search::CafeSearch

use crate::core::error::{CafeError, Result};

/// Raw `/cafe` query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeQuery {
    /// Catalog key (required)
    pub city: Option<String>,

    /// Result limit as sent by the client
    pub count: Option<String>,

    /// Case-insensitive name filter
    pub search: Option<String>,
}

impl CafeQuery {
    /// Build parameters from decoded query pairs
    ///
    /// Empty values are treated the same as missing ones, so the first
    /// non-empty occurrence of a repeated key wins. Unrecognized keys
    /// are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut query.city,
                "count" => &mut query.count,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                let value = value.into();
                if !value.is_empty() {
                    *slot = Some(value);
                }
            }
        }
        query
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Parsed result limit, `None` meaning unbounded
    pub fn limit(&self) -> Result<Option<usize>> {
        parse_count(self.count.as_deref())
    }

    /// Search text, `None` when absent or empty
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Parse the optional `count` parameter
///
/// Absent or empty yields `Ok(None)`. Anything that is not a
/// non-negative decimal integer fitting in `usize` is `InvalidCount`.
pub fn parse_count(raw: Option<&str>) -> Result<Option<usize>> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| CafeError::InvalidCount(raw.to_string())),
    }
}
