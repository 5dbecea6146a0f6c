//! Reciter (qari) identity and catalog
//!
//! Changing the selected reciter invalidates all in-flight audio, so the
//! identifier is treated as part of a playback session's identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated reciter identifier, e.g. `ar.alafasy`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReciterId(String);

impl ReciterId {
    /// Creates a reciter id; the id must be a non-empty `xx.name` edition code
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() || !id.contains('.') {
            return Err(format!("'{}' is not a valid reciter edition code", id));
        }
        Ok(Self(id))
    }

    /// Returns the raw edition code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReciterId {
    fn default() -> Self {
        Self("ar.alafasy".to_string())
    }
}

impl fmt::Display for ReciterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reciter catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reciter {
    pub id: ReciterId,
    pub name: String,
    pub arabic_name: String,
}

/// Returns the built-in reciter catalog
pub fn reciter_catalog() -> Vec<Reciter> {
    [
        ("ar.alafasy", "Mishary Alafasy", "مشاري العفاسي"),
        (
            "ar.abdurrahmaansudais",
            "Abdurrahman As-Sudais",
            "عبدالرحمن السديس",
        ),
        ("ar.abdulsamad", "Abdul Basit", "عبدالباسط عبدالصمد"),
        ("ar.husary", "Al-Husary", "محمود خليل الحصري"),
        ("ar.minshawi", "Al-Minshawi", "محمد صديق المنشاوي"),
    ]
    .iter()
    .map(|(id, name, arabic)| Reciter {
        id: ReciterId(id.to_string()),
        name: name.to_string(),
        arabic_name: arabic.to_string(),
    })
    .collect()
}
