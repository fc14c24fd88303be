//! Booking rule-engine errors

use thiserror::Error;

use crate::shared::errors::DomainError;

/// Tag identifying which booking rule rejected a request.
///
/// The HTTP layer maps each tag to a status code through a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingErrorKind {
    BodyError,
    EnrollmentError,
    TicketError,
    HotelError,
    RoomNotFound,
    NoCapacity,
    NoBooking,
    BookingFromAnotherUser,
    UndefinedError,
}

impl BookingErrorKind {
    pub const ALL: [BookingErrorKind; 9] = [
        Self::BodyError,
        Self::EnrollmentError,
        Self::TicketError,
        Self::HotelError,
        Self::RoomNotFound,
        Self::NoCapacity,
        Self::NoBooking,
        Self::BookingFromAnotherUser,
        Self::UndefinedError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BodyError => "BodyError",
            Self::EnrollmentError => "EnrollmentError",
            Self::TicketError => "TicketError",
            Self::HotelError => "HotelError",
            Self::RoomNotFound => "RoomNotFound",
            Self::NoCapacity => "NoCapacity",
            Self::NoBooking => "NoBooking",
            Self::BookingFromAnotherUser => "BookingFromAnotherUser",
            Self::UndefinedError => "UndefinedError",
        }
    }
}

impl std::fmt::Display for BookingErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Your body must contain roomId")]
    MissingRoomId,

    #[error("You don't have enrollment yet")]
    NoEnrollment,

    #[error("You don't have a valid ticket, make sure you have a ticket that's paid, isn't remote and includes hotel")]
    InvalidTicket,

    #[error("We don't have any available hotels yet")]
    NoHotels,

    #[error("Room with given ID wasn't found")]
    RoomNotFound,

    #[error("The room you select is out of capacity")]
    NoCapacity,

    #[error("You don't have any booking yet")]
    NoBooking,

    /// The path booking id is not the caller's own booking.
    #[error("This booking is from another user")]
    BookingFromAnotherUser,

    /// The store acknowledged the insert but handed back no row.
    #[error("something went wrong, please try again")]
    Undefined,

    #[error(transparent)]
    Storage(DomainError),
}

impl BookingError {
    /// Rule tag for this error; `None` for store failures.
    pub fn kind(&self) -> Option<BookingErrorKind> {
        let kind = match self {
            Self::MissingRoomId => BookingErrorKind::BodyError,
            Self::NoEnrollment => BookingErrorKind::EnrollmentError,
            Self::InvalidTicket => BookingErrorKind::TicketError,
            Self::NoHotels => BookingErrorKind::HotelError,
            Self::RoomNotFound => BookingErrorKind::RoomNotFound,
            Self::NoCapacity => BookingErrorKind::NoCapacity,
            Self::NoBooking => BookingErrorKind::NoBooking,
            Self::BookingFromAnotherUser => BookingErrorKind::BookingFromAnotherUser,
            Self::Undefined => BookingErrorKind::UndefinedError,
            Self::Storage(_) => return None,
        };
        Some(kind)
    }
}

impl From<DomainError> for BookingError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::RoomUnavailable(_) => Self::NoCapacity,
            DomainError::NotFound { entity: "Room", .. } => Self::RoomNotFound,
            other => Self::Storage(other),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_recheck_failure_surfaces_as_no_capacity() {
        let err: BookingError = DomainError::RoomUnavailable(4).into();
        assert!(matches!(err, BookingError::NoCapacity));
        assert_eq!(err.kind(), Some(BookingErrorKind::NoCapacity));
    }

    #[test]
    fn room_vanishing_before_the_write_is_room_not_found() {
        let err: BookingError = DomainError::NotFound {
            entity: "Room",
            field: "id",
            value: "4".into(),
        }
        .into();
        assert_eq!(err.kind(), Some(BookingErrorKind::RoomNotFound));
    }

    #[test]
    fn storage_errors_have_no_kind() {
        let err: BookingError = DomainError::Database("disk I/O error".into()).into();
        assert_eq!(err.kind(), None);
        assert_eq!(err.to_string(), "Database error: disk I/O error");
    }

    #[test]
    fn ticket_message_is_shared_by_all_ticket_rules() {
        assert_eq!(
            BookingError::InvalidTicket.to_string(),
            "You don't have a valid ticket, make sure you have a ticket that's paid, isn't remote and includes hotel"
        );
    }
}
