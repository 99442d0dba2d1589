use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a product brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique identifier of the brand.
    pub id: i32,
    /// Unique human-readable name, also part of product slugs.
    pub name: String,
    /// Timestamp for when the brand record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the brand record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new brand.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl NewBrand {
    /// Construct a new brand payload with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when renaming a brand.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBrand {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl UpdateBrand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
