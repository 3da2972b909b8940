//! Grid layout items embedded in a process's `grid_data` JSONB document.
//!
//! The stored document is a JSON array. Decoding is lenient: elements
//! that do not decode as a [`GridItem`] are replaced with a placeholder
//! item instead of failing the whole read. This is a deliberate
//! fallback rule of the decoding step, not error suppression.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name assigned to placeholder items produced for malformed elements.
pub const PLACEHOLDER_NAME: &str = "unknown";

/// One cell in a process's grid layout.
///
/// Field names mirror the stored JSON, which uses camelCase for the
/// display-positioning flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    pub name: String,
    #[serde(rename = "showRight", default)]
    pub show_right: bool,
    #[serde(rename = "showBelow", default)]
    pub show_below: bool,
    #[serde(default)]
    pub gridname: String,
}

impl GridItem {
    /// Placeholder for a stored element that does not decode as a grid
    /// item. The raw value is kept in `gridname` so it is not silently
    /// dropped.
    pub fn placeholder(raw: &Value) -> Self {
        let raw_text = match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            show_right: false,
            show_below: false,
            gridname: raw_text,
        }
    }
}

/// Decode a stored `grid_data` document into grid items.
///
/// Malformed elements become [`GridItem::placeholder`]s; a document
/// that is not an array decodes as an empty list.
pub fn items_from_value(value: &Value) -> Vec<GridItem> {
    let Some(elements) = value.as_array() else {
        return Vec::new();
    };
    elements
        .iter()
        .map(|element| {
            serde_json::from_value(element.clone())
                .unwrap_or_else(|_| GridItem::placeholder(element))
        })
        .collect()
}

/// Serialize grid items into the JSONB document form (a JSON array).
pub fn items_to_value(items: &[GridItem]) -> Value {
    serde_json::to_value(items).unwrap_or_else(|_| Value::Array(Vec::new()))
}
