//! Frontend Models
//!
//! Data structures persisted to localStorage.

use serde::{Deserialize, Serialize};

/// A single wish-list entry.
///
/// Field names on the wire are `gift` / `url` / `quantity`, the layout
/// already present in users' browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    #[serde(rename = "gift")]
    pub name: String,
    #[serde(rename = "url", default)]
    pub image_url: String,
    pub quantity: u32,
}

impl Gift {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            quantity,
        }
    }

    /// Case-insensitive name comparison used for uniqueness
    pub fn same_name(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.trim().to_lowercase()
    }

    /// Row label, e.g. `Bicicleta (2)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.quantity)
    }
}
