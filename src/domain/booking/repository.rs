//! Booking repository interface

use async_trait::async_trait;

use super::model::{Booking, BookingWithRoom};
use crate::domain::hotel::Room;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking of `room_id` for `user_id`.
    ///
    /// Only writes while the room still has capacity. A full room yields
    /// `DomainError::RoomUnavailable`, a vanished one `DomainError::NotFound`.
    /// `Ok(None)` means the store accepted the write but returned no row.
    async fn insert(&self, user_id: i32, room_id: i32) -> DomainResult<Option<Booking>>;

    /// Find a room by ID
    async fn find_room_by_id(&self, room_id: i32) -> DomainResult<Option<Room>>;

    /// Find the user's booking (lowest id first) together with its room
    async fn find_for_user(&self, user_id: i32) -> DomainResult<Option<BookingWithRoom>>;

    /// Point `booking_id` at `room_id`, with the same capacity condition as
    /// [`BookingRepository::insert`]. `Ok(None)` when the booking is gone.
    async fn set_room(&self, booking_id: i32, room_id: i32) -> DomainResult<Option<Booking>>;
}
