//! Ticket aggregate
//!
//! Purchased admission records and their types. Read-only for bookings.

pub mod model;
pub mod repository;

pub use model::{Ticket, TicketStatus, TicketType};
pub use repository::TicketRepository;
