//! Booking DTOs
//!
//! Field names are camelCase on the wire, except the GET response's `Room`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BookingWithRoom, Room};

/// Body of POST /booking and PUT /booking/{bookingId}
///
/// Only documents the accepted shape; bodies are read leniently by
/// `RoomSelection`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomSelectionRequest {
    /// Room to book; a number or a numeric string. 0 counts as missing
    #[schema(example = 1)]
    pub room_id: i64,
}

/// Response of POST and PUT
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            capacity: r.capacity,
            hotel_id: r.hotel_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Response of GET /booking
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    #[serde(rename = "Room")]
    pub room: RoomDto,
}

impl From<BookingWithRoom> for BookingDto {
    fn from(b: BookingWithRoom) -> Self {
        Self {
            id: b.id,
            room: b.room.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_serializes_with_capitalized_room() {
        let now = Utc::now();
        let dto = BookingDto::from(BookingWithRoom {
            id: 4,
            room: Room {
                id: 9,
                name: "204".into(),
                capacity: 3,
                hotel_id: 2,
                created_at: now,
                updated_at: now,
            },
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["Room"]["id"], 9);
        assert_eq!(json["Room"]["hotelId"], 2);
        assert!(json["Room"].get("createdAt").is_some());
    }

    #[test]
    fn booking_id_is_camel_case() {
        let json = serde_json::to_value(BookingIdResponse { booking_id: 11 }).unwrap();
        assert_eq!(json, serde_json::json!({ "bookingId": 11 }));
    }
}
