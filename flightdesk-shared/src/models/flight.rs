use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a bookable flight as issued by the flights service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FlightId(pub u64);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One end of an itinerary. Only `key` is relied upon; anything else the
/// service sends is kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub key: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Place {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A search result row, read-only on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub id: FlightId,
    pub arrival: String,
    pub company: String,
    pub duration: String,
    pub price: f64,
    pub source: Place,
    pub destination: Place,
}

impl Flight {
    /// Short route label, e.g. `DEL-BOM`.
    pub fn route(&self) -> String {
        format!("{}-{}", self.source.key, self.destination.key)
    }
}
