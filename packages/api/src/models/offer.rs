use serde::{Deserialize, Serialize};

use super::RestaurantId;

pub type OfferId = u64;

/// A special offer from `GET /offers?restaurantId={id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub restaurant_id: RestaurantId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: OfferKind,
    #[serde(default)]
    pub discount_percent: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum OfferKind {
    EarlyBird,
    LastMinute,
    #[default]
    #[serde(other)]
    Other,
}

impl OfferKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::EarlyBird => "Early Bird",
            Self::LastMinute => "Last Minute",
            Self::Other => "Offer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_maps_to_other() {
        let offer: Offer = serde_json::from_str(
            r#"{"id": 1, "restaurantId": 2, "title": "Happy hour", "kind": "happyHour"}"#,
        )
        .unwrap();
        assert_eq!(offer.kind, OfferKind::Other);

        let offer: Offer = serde_json::from_str(
            r#"{"id": 2, "restaurantId": 2, "title": "Early", "kind": "earlyBird", "discountPercent": 20}"#,
        )
        .unwrap();
        assert_eq!(offer.kind, OfferKind::EarlyBird);
        assert_eq!(offer.discount_percent, Some(20));
    }
}
