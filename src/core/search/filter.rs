//! Name matching and response rendering.

use crate::core::catalog::{Cafe, NAME_SEPARATOR};

/// Case-insensitive substring match on the café name
///
/// `needle` must already be lower-cased.
pub fn matches_name(cafe: &Cafe, needle: &str) -> bool {
    cafe.name.to_lowercase().contains(needle)
}

/// Join café names with the wire separator
///
/// An empty slice renders as an empty string.
pub fn render_names(cafes: &[&Cafe]) -> String {
    let mut body = String::new();
    for (i, cafe) in cafes.iter().enumerate() {
        if i > 0 {
            body.push(NAME_SEPARATOR);
        }
        body.push_str(&cafe.name);
    }
    body
}
