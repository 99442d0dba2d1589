use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a color a product can be offered in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Color {
    /// Unique identifier of the color.
    pub id: i32,
    /// Unique human-readable name of the color.
    pub name: String,
    /// Optional `#rrggbb` swatch value.
    pub hex: Option<String>,
    /// Timestamp for when the color record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the color record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new color.
#[derive(Debug, Clone, PartialEq)]
pub struct NewColor {
    pub name: String,
    pub hex: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewColor {
    /// Construct a new color payload with a trimmed name and no swatch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            hex: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a swatch value to the color payload.
    pub fn with_hex(mut self, hex: impl Into<String>) -> Self {
        self.hex = Some(hex.into());
        self
    }
}

/// Patch data applied when updating an existing color.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateColor {
    /// Updated name of the color.
    pub name: String,
    /// New swatch value; `None` clears it.
    pub hex: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateColor {
    pub fn new(name: impl Into<String>, hex: Option<String>) -> Self {
        Self {
            name: name.into(),
            hex,
            updated_at: Local::now().naive_utc(),
        }
    }
}
