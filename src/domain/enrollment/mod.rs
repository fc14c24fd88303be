//! Enrollment aggregate
//!
//! A user's registration record. Owned by the enrollment subsystem; bookings
//! only read it to gate eligibility.

pub mod model;
pub mod repository;

pub use model::{Address, Enrollment};
pub use repository::EnrollmentRepository;
