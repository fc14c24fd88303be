//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::booking::BookingRepository;
use super::enrollment::EnrollmentRepository;
use super::hotel::HotelRepository;
use super::ticket::TicketRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let enrollment = repos.enrollments().find_with_address_by_user_id(7).await?;
///     let booking = repos.bookings().find_for_user(7).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn bookings(&self) -> &dyn BookingRepository;
    fn enrollments(&self) -> &dyn EnrollmentRepository;
    fn tickets(&self) -> &dyn TicketRepository;
    fn hotels(&self) -> &dyn HotelRepository;
}
