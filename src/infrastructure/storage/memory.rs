//! In-memory repository implementation

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;

use crate::domain::{
    Address, Booking, BookingRepository, BookingWithRoom, DomainError, DomainResult, Enrollment,
    EnrollmentRepository, Hotel, HotelRepository, RepositoryProvider, Room, Ticket,
    TicketRepository, TicketStatus, TicketType,
};

/// In-memory storage for development and testing.
///
/// Implements every repository trait on one struct; the `add_*` seeders stand
/// in for the external subsystems that own enrollments, tickets and hotels.
pub struct InMemoryStorage {
    hotels: DashMap<i32, Hotel>,
    rooms: DashMap<i32, Room>,
    enrollments: DashMap<i32, Enrollment>,
    tickets: DashMap<i32, Ticket>,
    bookings: DashMap<i32, Booking>,
    id_counter: AtomicI32,
    /// Serializes booking writes with their capacity re-check.
    write_lock: Mutex<()>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            hotels: DashMap::new(),
            rooms: DashMap::new(),
            enrollments: DashMap::new(),
            tickets: DashMap::new(),
            bookings: DashMap::new(),
            id_counter: AtomicI32::new(1),
            write_lock: Mutex::new(()),
        }
    }

    fn next_id(&self) -> i32 {
        self.id_counter.fetch_add(1, Ordering::SeqCst)
    }

    pub fn add_hotel(&self, name: &str) -> Hotel {
        let now = Utc::now();
        let hotel = Hotel {
            id: self.next_id(),
            name: name.to_string(),
            image: format!("https://images.example.com/{}.jpg", name.to_lowercase()),
            created_at: now,
            updated_at: now,
        };
        self.hotels.insert(hotel.id, hotel.clone());
        hotel
    }

    pub fn add_room(&self, hotel_id: i32, capacity: i32) -> Room {
        let now = Utc::now();
        let id = self.next_id();
        let room = Room {
            id,
            name: format!("{}", 100 + id),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        self.rooms.insert(room.id, room.clone());
        room
    }

    /// Overwrite a room's capacity, as the hotel subsystem would.
    pub fn set_room_capacity(&self, room_id: i32, capacity: i32) {
        if let Some(mut room) = self.rooms.get_mut(&room_id) {
            room.capacity = capacity;
            room.updated_at = Utc::now();
        }
    }

    pub fn add_enrollment(&self, user_id: i32) -> Enrollment {
        let now = Utc::now();
        let id = self.next_id();
        let enrollment = Enrollment {
            id,
            name: format!("User {}", user_id),
            cpf: format!("{:011}", user_id),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            phone: "(21) 98999-9999".to_string(),
            user_id,
            address: Some(Address {
                id,
                cep: "20000-000".to_string(),
                street: "Rua Um".to_string(),
                city: "Rio de Janeiro".to_string(),
                state: "RJ".to_string(),
                number: "1".to_string(),
                neighborhood: "Centro".to_string(),
                address_detail: None,
                enrollment_id: id,
            }),
            created_at: now,
            updated_at: now,
        };
        self.enrollments.insert(enrollment.id, enrollment.clone());
        enrollment
    }

    pub fn add_ticket(
        &self,
        enrollment_id: i32,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> Ticket {
        let now = Utc::now();
        let ticket = Ticket {
            id: self.next_id(),
            enrollment_id,
            status,
            ticket_type: TicketType {
                id: self.next_id(),
                name: if is_remote { "Online" } else { "Presencial" }.to_string(),
                price: if includes_hotel { 60000 } else { 25000 },
                is_remote,
                includes_hotel,
            },
            created_at: now,
            updated_at: now,
        };
        self.tickets.insert(ticket.id, ticket.clone());
        ticket
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    fn room_with_capacity(&self, room_id: i32) -> DomainResult<Room> {
        let room = self
            .rooms
            .get(&room_id)
            .map(|r| r.clone())
            .ok_or_else(|| DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: room_id.to_string(),
            })?;
        if !room.has_capacity() {
            return Err(DomainError::RoomUnavailable(room_id));
        }
        Ok(room)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryStorage {
    async fn insert(&self, user_id: i32, room_id: i32) -> DomainResult<Option<Booking>> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| DomainError::Database("booking write lock poisoned".into()))?;
        self.room_with_capacity(room_id)?;

        let now = Utc::now();
        let booking = Booking {
            id: self.next_id(),
            user_id,
            room_id,
            created_at: now,
            updated_at: now,
        };
        self.bookings.insert(booking.id, booking.clone());
        Ok(Some(booking))
    }

    async fn find_room_by_id(&self, room_id: i32) -> DomainResult<Option<Room>> {
        Ok(self.rooms.get(&room_id).map(|r| r.clone()))
    }

    async fn find_for_user(&self, user_id: i32) -> DomainResult<Option<BookingWithRoom>> {
        let booking = self
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .min_by_key(|b| b.id)
            .map(|b| b.clone());

        let Some(booking) = booking else {
            return Ok(None);
        };
        let room = self.rooms.get(&booking.room_id).map(|r| r.clone());
        Ok(room.map(|room| BookingWithRoom {
            id: booking.id,
            room,
        }))
    }

    async fn set_room(&self, booking_id: i32, room_id: i32) -> DomainResult<Option<Booking>> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| DomainError::Database("booking write lock poisoned".into()))?;
        self.room_with_capacity(room_id)?;

        let Some(mut booking) = self.bookings.get_mut(&booking_id) else {
            return Ok(None);
        };
        booking.room_id = room_id;
        booking.updated_at = Utc::now();
        Ok(Some(booking.clone()))
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryStorage {
    async fn find_with_address_by_user_id(&self, user_id: i32) -> DomainResult<Option<Enrollment>> {
        Ok(self
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id)
            .map(|e| e.clone()))
    }
}

#[async_trait]
impl TicketRepository for InMemoryStorage {
    async fn find_by_enrollment_id(&self, enrollment_id: i32) -> DomainResult<Option<Ticket>> {
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.enrollment_id == enrollment_id)
            .min_by_key(|t| t.id)
            .map(|t| t.clone()))
    }
}

#[async_trait]
impl HotelRepository for InMemoryStorage {
    async fn find_all(&self) -> DomainResult<Vec<Hotel>> {
        let mut hotels: Vec<Hotel> = self.hotels.iter().map(|h| h.clone()).collect();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels)
    }
}

impl RepositoryProvider for InMemoryStorage {
    fn bookings(&self) -> &dyn BookingRepository {
        self
    }

    fn enrollments(&self) -> &dyn EnrollmentRepository {
        self
    }

    fn tickets(&self) -> &dyn TicketRepository {
        self
    }

    fn hotels(&self) -> &dyn HotelRepository {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_rechecks_capacity_under_lock() {
        let storage = InMemoryStorage::new();
        let hotel = storage.add_hotel("Driven");
        let room = storage.add_room(hotel.id, 1);
        storage.set_room_capacity(room.id, 0);

        let err = storage.insert(1, room.id).await.unwrap_err();
        assert!(matches!(err, DomainError::RoomUnavailable(id) if id == room.id));
        assert_eq!(storage.booking_count(), 0);
    }

    #[tokio::test]
    async fn find_for_user_returns_lowest_id() {
        let storage = InMemoryStorage::new();
        let hotel = storage.add_hotel("Driven");
        let first = storage.add_room(hotel.id, 2);
        let second = storage.add_room(hotel.id, 2);

        let booking = storage.insert(7, first.id).await.unwrap().unwrap();
        storage.insert(7, second.id).await.unwrap();

        let found = storage.find_for_user(7).await.unwrap().unwrap();
        assert_eq!(found.id, booking.id);
        assert_eq!(found.room.id, first.id);
    }

    #[tokio::test]
    async fn set_room_on_missing_booking_is_none() {
        let storage = InMemoryStorage::new();
        let hotel = storage.add_hotel("Driven");
        let room = storage.add_room(hotel.id, 2);

        assert!(storage.set_room(999, room.id).await.unwrap().is_none());
    }
}
