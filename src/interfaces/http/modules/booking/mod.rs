pub mod dto;
pub mod handlers;

pub use handlers::{create_booking, get_booking, update_booking, BookingAppState};
