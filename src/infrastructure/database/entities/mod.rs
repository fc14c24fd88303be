//! Database entities module

pub mod address;
pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod room;
pub mod ticket;
pub mod ticket_type;
pub mod user;

pub use address::Entity as Address;
pub use booking::Entity as Booking;
pub use enrollment::Entity as Enrollment;
pub use hotel::Entity as Hotel;
pub use room::Entity as Room;
pub use ticket::Entity as Ticket;
pub use ticket_type::Entity as TicketType;
pub use user::Entity as User;
