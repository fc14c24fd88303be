//! # Hotel Booking Service
//!
//! REST service that lets an enrolled event attendee with a paid, in-person,
//! hotel-inclusive ticket book a hotel room, view the booking and move it to
//! another room.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities and repository traits
//! - **application**: The booking rules (`BookingService`)
//! - **infrastructure**: SeaORM persistence, in-memory storage, JWT
//! - **interfaces**: axum HTTP surface with Swagger documentation
//! - **shared**: Error types and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, run_migrations, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
