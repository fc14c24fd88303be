//! Booking use-cases: the validation chain in front of every booking write

mod error;
mod service;

pub use error::{BookingError, BookingErrorKind, BookingResult};
pub use service::BookingService;
