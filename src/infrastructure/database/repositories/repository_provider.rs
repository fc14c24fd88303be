//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    BookingRepository, EnrollmentRepository, HotelRepository, RepositoryProvider, TicketRepository,
};

use super::booking_repository::SeaOrmBookingRepository;
use super::enrollment_repository::SeaOrmEnrollmentRepository;
use super::hotel_repository::SeaOrmHotelRepository;
use super::ticket_repository::SeaOrmTicketRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let booking = repos.bookings().find_for_user(user_id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    bookings: SeaOrmBookingRepository,
    enrollments: SeaOrmEnrollmentRepository,
    tickets: SeaOrmTicketRepository,
    hotels: SeaOrmHotelRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            bookings: SeaOrmBookingRepository::new(db.clone()),
            enrollments: SeaOrmEnrollmentRepository::new(db.clone()),
            tickets: SeaOrmTicketRepository::new(db.clone()),
            hotels: SeaOrmHotelRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn enrollments(&self) -> &dyn EnrollmentRepository {
        &self.enrollments
    }

    fn tickets(&self) -> &dyn TicketRepository {
        &self.tickets
    }

    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }
}
