//! Hotel aggregate: hotels and their rooms (read-only for bookings)

pub mod model;
pub mod repository;

pub use model::{Hotel, Room};
pub use repository::HotelRepository;
