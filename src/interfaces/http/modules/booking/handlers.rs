//! Booking HTTP handlers
//!
//! Thin wrappers over [`BookingService`]: identity comes from the auth
//! middleware, `roomId` from [`RoomSelection`], and every failure goes
//! through [`error_response`].

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde_json::json;
use tracing::error;

use crate::application::{BookingError, BookingErrorKind, BookingService};
use crate::interfaces::http::common::RoomSelection;
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<BookingService>,
}

/// HTTP status for each booking rule, identical on every endpoint.
pub fn status_for(kind: BookingErrorKind) -> StatusCode {
    match kind {
        BookingErrorKind::BodyError => StatusCode::BAD_REQUEST,
        BookingErrorKind::EnrollmentError => StatusCode::NOT_FOUND,
        BookingErrorKind::TicketError => StatusCode::FORBIDDEN,
        BookingErrorKind::HotelError => StatusCode::NOT_FOUND,
        BookingErrorKind::RoomNotFound => StatusCode::NOT_FOUND,
        BookingErrorKind::NoCapacity => StatusCode::FORBIDDEN,
        BookingErrorKind::NoBooking => StatusCode::NOT_FOUND,
        BookingErrorKind::BookingFromAnotherUser => StatusCode::UNAUTHORIZED,
        BookingErrorKind::UndefinedError => StatusCode::BAD_REQUEST,
    }
}

/// Rule failures answer with their message as plain text. Anything else
/// (storage failures) answers `{}` with the endpoint's `fallback` status.
pub fn error_response(err: BookingError, fallback: StatusCode) -> Response {
    if let Some(kind) = err.kind() {
        return (status_for(kind), err.to_string()).into_response();
    }

    let transient = matches!(&err, BookingError::Storage(cause) if cause.is_transient());
    error!(
        error = %err,
        transient,
        status = fallback.as_u16(),
        "Booking request failed"
    );
    (fallback, Json(json!({}))).into_response()
}

#[utoipa::path(
    post,
    path = "/booking",
    tag = "Booking",
    security(("bearer_auth" = [])),
    request_body = RoomSelectionRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingIdResponse),
        (status = 400, description = "roomId missing or invalid", body = String),
        (status = 401, description = "Missing or invalid token"),
        (status = 402, description = "Unexpected failure"),
        (status = 403, description = "No valid ticket, or room out of capacity", body = String),
        (status = 404, description = "No enrollment, no hotels, or room not found", body = String)
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    RoomSelection(room_id): RoomSelection,
) -> Response {
    match state.service.create(user.user_id, room_id).await {
        Ok(booking) => (
            StatusCode::CREATED,
            Json(BookingIdResponse {
                booking_id: booking.id,
            }),
        )
            .into_response(),
        Err(e) => error_response(e, StatusCode::PAYMENT_REQUIRED),
    }
}

#[utoipa::path(
    get,
    path = "/booking",
    tag = "Booking",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's booking with its room", body = BookingDto),
        (status = 401, description = "Missing or invalid token, or unexpected failure"),
        (status = 404, description = "No booking yet", body = String)
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Response {
    match state.service.get_for_user(user.user_id).await {
        Ok(booking) => Json(BookingDto::from(booking)).into_response(),
        Err(e) => error_response(e, StatusCode::UNAUTHORIZED),
    }
}

#[utoipa::path(
    put,
    path = "/booking/{booking_id}",
    tag = "Booking",
    security(("bearer_auth" = [])),
    params(("booking_id" = String, Path, description = "The caller's booking ID")),
    request_body = RoomSelectionRequest,
    responses(
        (status = 200, description = "Booking moved to the new room", body = BookingIdResponse),
        (status = 400, description = "roomId missing or invalid", body = String),
        (status = 401, description = "Booking belongs to someone else, missing token, or unexpected failure", body = String),
        (status = 403, description = "Room out of capacity", body = String),
        (status = 404, description = "No booking yet, or room not found", body = String)
    )
)]
pub async fn update_booking(
    State(state): State<BookingAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(booking_id): Path<String>,
    RoomSelection(room_id): RoomSelection,
) -> Response {
    let booking_id = booking_id.trim().parse::<i64>().ok();

    match state.service.update(user.user_id, room_id, booking_id).await {
        Ok(booking) => Json(BookingIdResponse {
            booking_id: booking.id,
        })
        .into_response(),
        Err(e) => error_response(e, StatusCode::UNAUTHORIZED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use axum::body::to_bytes;

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn status_table_matches_rules() {
        let expected = [
            (BookingErrorKind::BodyError, 400),
            (BookingErrorKind::EnrollmentError, 404),
            (BookingErrorKind::TicketError, 403),
            (BookingErrorKind::HotelError, 404),
            (BookingErrorKind::RoomNotFound, 404),
            (BookingErrorKind::NoCapacity, 403),
            (BookingErrorKind::NoBooking, 404),
            (BookingErrorKind::BookingFromAnotherUser, 401),
            (BookingErrorKind::UndefinedError, 400),
        ];
        assert_eq!(expected.len(), BookingErrorKind::ALL.len());
        for (kind, status) in expected {
            assert_eq!(status_for(kind).as_u16(), status, "{kind}");
        }
    }

    #[tokio::test]
    async fn rule_errors_carry_their_message() {
        let resp = error_response(BookingError::NoCapacity, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_text(resp).await, "The room you select is out of capacity");
    }

    #[tokio::test]
    async fn storage_errors_use_fallback_with_empty_object() {
        let err = BookingError::from(DomainError::Database("connection reset".into()));
        let resp = error_response(err, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body_text(resp).await, "{}");
    }
}
