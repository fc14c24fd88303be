//! Booking aggregate
//!
//! Contains the Booking entity and the repository interface used by the
//! booking rule engine.

pub mod model;
pub mod repository;

pub use model::{Booking, BookingWithRoom, RoomRef};
pub use repository::BookingRepository;
