//! Application layer: use-case orchestration over the domain repositories

pub mod booking;

pub use booking::{BookingError, BookingErrorKind, BookingResult, BookingService};
