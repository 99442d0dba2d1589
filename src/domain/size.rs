use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a size label (for example `M` or `42`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new size.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSize {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl NewSize {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when renaming a size.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSize {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl UpdateSize {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
