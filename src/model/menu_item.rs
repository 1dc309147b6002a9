use serde::{Deserialize, Serialize};

/// A single dish on a restaurant's menu.
///
/// Belongs to exactly one restaurant and is fetched fresh whenever that
/// restaurant is selected. The price recorded here is what the cart captures
/// at add time; it is never re-fetched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Opaque backend identity, unique within its restaurant (serialized as `_id`).
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Non-negative, currency-unscaled (e.g. `9.5` for $9.50).
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: None,
            image: None,
        }
    }
}
