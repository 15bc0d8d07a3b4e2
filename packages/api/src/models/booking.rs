use serde::{Deserialize, Serialize};

use super::RestaurantId;

pub type BookingId = u64;

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub restaurant_id: RestaurantId,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub guests: u32,
}

/// A booking as returned by `POST /bookings` and `GET /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub restaurant_id: RestaurantId,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    pub date: String,
    pub time: String,
    pub guests: u32,
    #[serde(default)]
    pub status: Option<String>,
}

impl Booking {
    pub fn restaurant_label(&self) -> String {
        self.restaurant_name
            .clone()
            .unwrap_or_else(|| format!("Restaurant #{}", self.restaurant_id))
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("pending")
    }

    pub fn guests_label(&self) -> String {
        match self.guests {
            1 => "1 guest".to_string(),
            n => format!("{n} guests"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialises_camel_case() {
        let request = BookingRequest {
            restaurant_id: 3,
            date: "2025-06-01".to_string(),
            time: "19:30".to_string(),
            guests: 2,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["restaurantId"], 3);
        assert_eq!(json["guests"], 2);
    }

    #[test]
    fn test_labels_fall_back() {
        let booking: Booking = serde_json::from_str(
            r#"{"id": 1, "restaurantId": 9, "date": "2025-06-01", "time": "19:30", "guests": 1}"#,
        )
        .unwrap();
        assert_eq!(booking.restaurant_label(), "Restaurant #9");
        assert_eq!(booking.status_label(), "pending");
        assert_eq!(booking.guests_label(), "1 guest");
    }
}
