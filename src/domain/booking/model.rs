//! Booking domain entity

use chrono::{DateTime, Utc};

use crate::domain::hotel::Room;

/// A user's hotel-room booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Room named by a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomRef {
    Id(i32),
    /// A non-zero number that is not an integer in the id range. It names
    /// no room.
    Unknown,
}

impl RoomRef {
    /// Interpret a non-zero number as a room reference.
    pub fn from_number(value: f64) -> Self {
        let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
        if value.fract() == 0.0 && in_range {
            Self::Id(value as i32)
        } else {
            Self::Unknown
        }
    }

    pub fn id(&self) -> Option<i32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Unknown => None,
        }
    }
}

impl From<i32> for RoomRef {
    fn from(id: i32) -> Self {
        Self::Id(id)
    }
}

/// Booking as returned to its owner: the booking id plus the booked room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWithRoom {
    pub id: i32,
    pub room: Room,
}

impl BookingWithRoom {
    /// Whether the path-supplied booking id refers to this booking.
    ///
    /// Ids that do not parse as an integer never match.
    pub fn is_same_booking(&self, booking_id: Option<i64>) -> bool {
        booking_id == Some(i64::from(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BookingWithRoom {
        let now = Utc::now();
        BookingWithRoom {
            id: 12,
            room: Room {
                id: 3,
                name: "101".into(),
                capacity: 2,
                hotel_id: 1,
                created_at: now,
                updated_at: now,
            },
        }
    }

    #[test]
    fn integral_numbers_are_room_ids() {
        assert_eq!(RoomRef::from_number(7.0), RoomRef::Id(7));
        assert_eq!(RoomRef::from_number(-3.0), RoomRef::Id(-3));
    }

    #[test]
    fn fractional_or_huge_numbers_name_no_room() {
        assert_eq!(RoomRef::from_number(1.5), RoomRef::Unknown);
        assert_eq!(RoomRef::from_number(198_198_989_898.0), RoomRef::Unknown);
        assert_eq!(RoomRef::from_number(f64::INFINITY), RoomRef::Unknown);
        assert_eq!(RoomRef::Unknown.id(), None);
    }

    #[test]
    fn same_booking_matches_own_id() {
        assert!(sample().is_same_booking(Some(12)));
    }

    #[test]
    fn other_or_missing_id_does_not_match() {
        let booking = sample();
        assert!(!booking.is_same_booking(Some(22)));
        assert!(!booking.is_same_booking(None));
        assert!(!booking.is_same_booking(Some(i64::from(i32::MAX) + 12)));
    }
}
