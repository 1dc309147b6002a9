use serde::{Deserialize, Serialize};

/// A restaurant in the storefront catalog.
///
/// Immutable once fetched: the catalog is replaced wholesale on reload or
/// seed, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Opaque backend identity (serialized as `_id`).
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    /// Delivery-time estimate in minutes.
    pub delivery_time_min: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Restaurant {
    /// Creates a new Restaurant instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier assigned by the backend
    /// * `name` - Display name
    /// * `cuisine` - Cuisine tag (e.g. "Italian")
    /// * `rating` - Numeric rating
    /// * `delivery_time_min` - Delivery estimate in minutes
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        rating: f32,
        delivery_time_min: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            rating,
            delivery_time_min,
            description: None,
            image: None,
        }
    }
}
