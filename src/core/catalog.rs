//! City → café catalog.
//!
//! The catalog is built once at startup, either from the built-in
//! data set or from a TOML file, and is read-only afterwards. It is
//! shared between request handlers behind an `Arc` and needs no
//! locking.

use crate::core::error::{CafeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Separator used by the plain-text wire format
pub const NAME_SEPARATOR: char = ',';

/// A single café record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    /// Display name, matched by `search`
    pub name: String,

    /// Street address
    pub address: String,

    /// Contact phone number
    pub phone_number: String,
}

impl Cafe {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cities: HashMap<String, Vec<Cafe>>,
}

/// Immutable mapping from city key to its ordered café list
///
/// City keys are case-sensitive. The order of cafés within a city is
/// the order they were inserted in and drives result ordering.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: HashMap<String, Vec<Cafe>>,
}

impl Catalog {
    /// Build a catalog from `(city, cafés)` pairs
    ///
    /// Fails on an empty city key, a café without a name, or a city
    /// listed twice.
    pub fn from_cities<I, S>(cities: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<Cafe>)>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (city, cafes) in cities {
            let city = city.into();
            validate_city(&city, &cafes)?;
            if map.insert(city.clone(), cafes).is_some() {
                return Err(CafeError::CatalogError(format!(
                    "City listed twice: {city}"
                )));
            }
        }
        Ok(Self { cities: map })
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// - `IoError`: file cannot be read
    /// - `TomlError`: file is not valid catalog TOML
    /// - `CatalogError`: file has no cities or invalid entries
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).inspect_err(|e| {
            tracing::error!("Failed to read catalog file {}: {}", path.display(), e);
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        let catalog = Self::from_cities(file.cities)?;
        if catalog.is_empty() {
            return Err(CafeError::CatalogError(
                "Catalog contains no cities".to_string(),
            ));
        }
        Ok(catalog)
    }

    /// Built-in data set served when no catalog file is configured
    pub fn builtin() -> Self {
        let moscow = vec![
            Cafe::new("Мир кофе", "ул. Тверская, 12", "+7 495 123-45-01"),
            Cafe::new("Сладкоежка", "ул. Арбат, 4", "+7 495 123-45-02"),
            Cafe::new("Кофе и завтраки", "Покровка, 27", "+7 495 123-45-03"),
            Cafe::new("Сытый студент", "ул. Стромынка, 20", "+7 495 123-45-04"),
            Cafe::new("Ложка и вилка", "Кутузовский пр., 30", "+7 495 123-45-05"),
        ];
        let tula = vec![
            Cafe::new("Кофе с собой", "пр. Ленина, 15", "+7 4872 55-00-01"),
            Cafe::new("Пряничный домик", "ул. Металлистов, 3", "+7 4872 55-00-02"),
            Cafe::new("Самовар", "ул. Менделеевская, 1", "+7 4872 55-00-03"),
            Cafe::new("Пироги и кофе", "ул. Советская, 47", "+7 4872 55-00-04"),
            Cafe::new("Тульская вилка", "Красноармейский пр., 8", "+7 4872 55-00-05"),
        ];

        Self {
            cities: HashMap::from([("moscow".to_string(), moscow), ("tula".to_string(), tula)]),
        }
    }

    /// Ordered cafés for `city`, or `None` for an unknown key
    pub fn cafes(&self, city: &str) -> Option<&[Cafe]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// City keys, sorted for stable output
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        cities.sort_unstable();
        cities
    }

    /// Number of cities
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Log a summary of the loaded catalog
    pub fn log_summary(&self) {
        tracing::info!("Catalog loaded: {} cities", self.len());
        for city in self.cities() {
            let cafes = &self.cities[city];
            tracing::info!("  {}: {} cafés", city, cafes.len());
            for cafe in cafes.iter().filter(|c| c.name.contains(NAME_SEPARATOR)) {
                tracing::warn!(
                    city = %city,
                    name = %cafe.name,
                    "Café name contains the response separator; clients splitting on ',' will misread it"
                );
            }
        }
    }
}

fn validate_city(city: &str, cafes: &[Cafe]) -> Result<()> {
    if city.is_empty() {
        return Err(CafeError::CatalogError(
            "City key must be non-empty".to_string(),
        ));
    }

    if let Some(pos) = cafes.iter().position(|c| c.name.is_empty()) {
        return Err(CafeError::CatalogError(format!(
            "Café #{} in {city} has an empty name",
            pos + 1
        )));
    }

    Ok(())
}
