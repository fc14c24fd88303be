//! Booking service: application-layer orchestration
//!
//! Every operation is a fail-fast chain of lookups ending in at most one
//! write. HTTP handlers are thin wrappers that delegate here.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::{BookingError, BookingResult};
use crate::domain::{Booking, BookingWithRoom, RepositoryProvider, Room, RoomRef};

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Book `room_id` for `user_id`.
    ///
    /// Gates, in order: room id present, enrollment, hotel-eligible ticket,
    /// at least one hotel, room exists, room has capacity.
    pub async fn create(&self, user_id: i32, room_id: Option<RoomRef>) -> BookingResult<Booking> {
        let room_id = room_id.ok_or(BookingError::MissingRoomId)?;

        let enrollment = self
            .repos
            .enrollments()
            .find_with_address_by_user_id(user_id)
            .await?
            .ok_or(BookingError::NoEnrollment)?;

        let ticket = self
            .repos
            .tickets()
            .find_by_enrollment_id(enrollment.id)
            .await?;
        match ticket {
            Some(ticket) if ticket.grants_hotel() => {}
            _ => return Err(BookingError::InvalidTicket),
        }

        if self.repos.hotels().find_all().await?.is_empty() {
            return Err(BookingError::NoHotels);
        }

        let room = self.available_room(room_id).await?;

        let booking = self
            .repos
            .bookings()
            .insert(user_id, room.id)
            .await?
            .ok_or(BookingError::Undefined)?;

        info!(
            booking_id = booking.id,
            user_id,
            room_id = room.id,
            "Booking created"
        );
        Ok(booking)
    }

    /// The user's booking with its room.
    pub async fn get_for_user(&self, user_id: i32) -> BookingResult<BookingWithRoom> {
        self.repos
            .bookings()
            .find_for_user(user_id)
            .await?
            .ok_or(BookingError::NoBooking)
    }

    /// Move the caller's booking `booking_id` to `room_id`.
    ///
    /// `booking_id` is `None` when the path segment was not an integer; it
    /// then never matches the caller's booking.
    pub async fn update(
        &self,
        user_id: i32,
        room_id: Option<RoomRef>,
        booking_id: Option<i64>,
    ) -> BookingResult<Booking> {
        let current = self.get_for_user(user_id).await?;

        let room_id = room_id.ok_or(BookingError::MissingRoomId)?;
        let room = self.available_room(room_id).await?;

        if !current.is_same_booking(booking_id) {
            debug!(
                user_id,
                own_booking = current.id,
                requested = ?booking_id,
                "Booking id does not match the caller's booking"
            );
            return Err(BookingError::BookingFromAnotherUser);
        }

        let booking = self
            .repos
            .bookings()
            .set_room(current.id, room.id)
            .await?
            .ok_or(BookingError::NoBooking)?;

        info!(
            booking_id = booking.id,
            user_id,
            from_room = current.room.id,
            to_room = room.id,
            "Booking moved to another room"
        );
        Ok(booking)
    }

    /// Look up a room that exists and has capacity.
    async fn available_room(&self, room_id: RoomRef) -> BookingResult<Room> {
        let room = match room_id.id() {
            Some(id) => self.repos.bookings().find_room_by_id(id).await?,
            None => None,
        };
        let room = room.ok_or(BookingError::RoomNotFound)?;

        if !room.has_capacity() {
            return Err(BookingError::NoCapacity);
        }
        Ok(room)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::booking::BookingErrorKind;
    use crate::domain::TicketStatus;
    use crate::infrastructure::storage::InMemoryStorage;

    const USER: i32 = 1;

    struct Fixture {
        storage: Arc<InMemoryStorage>,
        service: BookingService,
    }

    fn fixture() -> Fixture {
        let storage = Arc::new(InMemoryStorage::new());
        let service = BookingService::new(storage.clone());
        Fixture { storage, service }
    }

    /// Enrollment + paid in-person hotel ticket + one hotel with a free room.
    fn eligible() -> (Fixture, Room) {
        let f = fixture();
        let enrollment = f.storage.add_enrollment(USER);
        f.storage
            .add_ticket(enrollment.id, TicketStatus::Paid, false, true);
        let hotel = f.storage.add_hotel("Driven Resort");
        let room = f.storage.add_room(hotel.id, 3);
        (f, room)
    }

    fn kind<T: std::fmt::Debug>(result: BookingResult<T>) -> BookingErrorKind {
        result
            .expect_err("operation should fail")
            .kind()
            .expect("rule error")
    }

    #[tokio::test]
    async fn create_without_room_id_is_body_error() {
        let (f, _) = eligible();
        assert_eq!(
            kind(f.service.create(USER, None).await),
            BookingErrorKind::BodyError
        );
    }

    #[tokio::test]
    async fn room_id_is_checked_before_enrollment() {
        let f = fixture();
        assert_eq!(
            kind(f.service.create(USER, None).await),
            BookingErrorKind::BodyError
        );
    }

    #[tokio::test]
    async fn create_without_enrollment_is_enrollment_error() {
        let f = fixture();
        assert_eq!(
            kind(f.service.create(USER, Some(RoomRef::Id(1))).await),
            BookingErrorKind::EnrollmentError
        );
    }

    #[tokio::test]
    async fn create_without_ticket_is_ticket_error() {
        let f = fixture();
        f.storage.add_enrollment(USER);
        assert_eq!(
            kind(f.service.create(USER, Some(RoomRef::Id(1))).await),
            BookingErrorKind::TicketError
        );
    }

    #[tokio::test]
    async fn every_ineligible_ticket_is_ticket_error() {
        let cases = [
            (TicketStatus::Reserved, false, true),
            (TicketStatus::Paid, true, true),
            (TicketStatus::Paid, false, false),
            (TicketStatus::Reserved, true, false),
            (TicketStatus::Reserved, true, true),
            (TicketStatus::Paid, true, false),
        ];

        for (status, is_remote, includes_hotel) in cases {
            let f = fixture();
            let enrollment = f.storage.add_enrollment(USER);
            f.storage
                .add_ticket(enrollment.id, status, is_remote, includes_hotel);
            let hotel = f.storage.add_hotel("Driven Resort");
            let room = f.storage.add_room(hotel.id, 3);

            assert_eq!(
                kind(f.service.create(USER, Some(room.id.into())).await),
                BookingErrorKind::TicketError,
                "status={status} remote={is_remote} hotel={includes_hotel}"
            );
        }
    }

    #[tokio::test]
    async fn create_without_hotels_is_hotel_error() {
        let f = fixture();
        let enrollment = f.storage.add_enrollment(USER);
        f.storage
            .add_ticket(enrollment.id, TicketStatus::Paid, false, true);
        assert_eq!(
            kind(f.service.create(USER, Some(RoomRef::Id(1))).await),
            BookingErrorKind::HotelError
        );
    }

    #[tokio::test]
    async fn create_with_unknown_room_is_room_not_found() {
        let (f, room) = eligible();
        assert_eq!(
            kind(f.service.create(USER, Some((room.id + 100).into())).await),
            BookingErrorKind::RoomNotFound
        );
        assert_eq!(
            kind(f.service.create(USER, Some(RoomRef::Unknown)).await),
            BookingErrorKind::RoomNotFound
        );
    }

    #[tokio::test]
    async fn create_with_full_room_is_no_capacity() {
        let (f, room) = eligible();
        let full = f.storage.add_room(room.hotel_id, 0);
        assert_eq!(
            kind(f.service.create(USER, Some(full.id.into())).await),
            BookingErrorKind::NoCapacity
        );
        assert_eq!(f.storage.booking_count(), 0);
    }

    #[tokio::test]
    async fn create_books_room() {
        let (f, room) = eligible();
        let booking = f.service.create(USER, Some(room.id.into())).await.unwrap();
        assert_eq!(booking.user_id, USER);
        assert_eq!(booking.room_id, room.id);

        let found = f.service.get_for_user(USER).await.unwrap();
        assert_eq!(found.id, booking.id);
        assert_eq!(found.room, room);
    }

    #[tokio::test]
    async fn get_without_booking_is_no_booking() {
        let f = fixture();
        assert_eq!(
            kind(f.service.get_for_user(USER).await),
            BookingErrorKind::NoBooking
        );
    }

    #[tokio::test]
    async fn update_without_booking_is_no_booking_even_without_body() {
        let f = fixture();
        assert_eq!(
            kind(f.service.update(USER, None, Some(1)).await),
            BookingErrorKind::NoBooking
        );
    }

    #[tokio::test]
    async fn update_gates_in_order() {
        let (f, room) = eligible();
        let booking = f.service.create(USER, Some(room.id.into())).await.unwrap();
        let own = Some(i64::from(booking.id));

        assert_eq!(
            kind(f.service.update(USER, None, own).await),
            BookingErrorKind::BodyError
        );
        // Room lookup comes before the ownership check.
        assert_eq!(
            kind(f.service.update(USER, Some(RoomRef::Id(9_999)), Some(12_345)).await),
            BookingErrorKind::RoomNotFound
        );
        let full = f.storage.add_room(room.hotel_id, 0);
        assert_eq!(
            kind(f.service.update(USER, Some(full.id.into()), Some(12_345)).await),
            BookingErrorKind::NoCapacity
        );
        assert_eq!(
            kind(f.service.update(USER, Some(room.id.into()), own.map(|id| id + 10)).await),
            BookingErrorKind::BookingFromAnotherUser
        );
        assert_eq!(
            kind(f.service.update(USER, Some(room.id.into()), None).await),
            BookingErrorKind::BookingFromAnotherUser
        );
    }

    #[tokio::test]
    async fn failed_update_keeps_previous_room() {
        let (f, room) = eligible();
        let booking = f.service.create(USER, Some(room.id.into())).await.unwrap();
        let full = f.storage.add_room(room.hotel_id, 0);

        let result = f
            .service
            .update(USER, Some(full.id.into()), Some(booking.id.into()))
            .await;
        assert_eq!(kind(result), BookingErrorKind::NoCapacity);

        let current = f.service.get_for_user(USER).await.unwrap();
        assert_eq!(current.room.id, room.id);
    }

    #[tokio::test]
    async fn update_moves_booking_to_new_room() {
        let (f, room_a) = eligible();
        let room_b = f.storage.add_room(room_a.hotel_id, 1);
        let booking = f.service.create(USER, Some(room_a.id.into())).await.unwrap();

        let updated = f
            .service
            .update(USER, Some(room_b.id.into()), Some(booking.id.into()))
            .await
            .unwrap();
        assert_eq!(updated.id, booking.id);
        assert_eq!(updated.room_id, room_b.id);

        let current = f.service.get_for_user(USER).await.unwrap();
        assert_eq!(current.room, room_b);
    }

    #[tokio::test]
    async fn bookings_are_scoped_to_their_user() {
        let (f, room) = eligible();
        f.service.create(USER, Some(room.id.into())).await.unwrap();

        assert_eq!(
            kind(f.service.get_for_user(USER + 1).await),
            BookingErrorKind::NoBooking
        );
    }
}
