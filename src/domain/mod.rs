//! Domain layer: entities and repository interfaces, no I/O

pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod repositories;
pub mod ticket;

pub use booking::{Booking, BookingRepository, BookingWithRoom, RoomRef};
pub use enrollment::{Address, Enrollment, EnrollmentRepository};
pub use hotel::{Hotel, HotelRepository, Room};
pub use repositories::{DomainResult, RepositoryProvider};
pub use ticket::{Ticket, TicketRepository, TicketStatus, TicketType};

pub use crate::shared::errors::DomainError;
