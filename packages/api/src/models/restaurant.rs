use serde::{Deserialize, Serialize};

pub type RestaurantId = u64;

const NOT_SPECIFIED: &str = "Not specified";

/// A restaurant as listed by `GET /restaurants` and `GET /restaurants/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    /// Gallery image URLs, first one doubles as the card thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub has_early_bird: bool,
    #[serde(default)]
    pub has_last_minute: bool,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub operating_hours: Vec<OperatingHours>,
}

/// Opening hours for one day, already formatted by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatingHours {
    pub day: String,
    pub hours: String,
}

impl Restaurant {
    pub fn description_label(&self) -> &str {
        self.description.as_deref().unwrap_or("No description yet.")
    }

    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn cuisine_label(&self) -> &str {
        self.cuisine.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn phone_label(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn price_range_label(&self) -> &str {
        self.price_range.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
