//! Lenient `roomId` body extractor for Axum
//!
//! `RoomSelection` never rejects. A body that is missing, is not JSON, or
//! has no usable `roomId` yields `RoomSelection(None)` and the booking
//! service decides what that means at its own point in the gate order.
//! `roomId` may be a JSON number or a numeric string. Zero counts as
//! missing; any other number is passed on and an id that cannot exist
//! ends up as "room not found".

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::domain::RoomRef;

pub struct RoomSelection(pub Option<RoomRef>);

#[derive(Debug, Validate)]
struct RoomSelectionBody {
    #[validate(custom(function = "non_zero"))]
    room_id: f64,
}

fn non_zero(value: f64) -> Result<(), ValidationError> {
    if value == 0.0 || value.is_nan() {
        return Err(ValidationError::new("room_id_missing"));
    }
    Ok(())
}

impl RoomSelectionBody {
    fn from_json(value: &Value) -> Option<Self> {
        let room_id = match value.get("roomId")? {
            Value::Number(n) => n.as_f64()?,
            // An empty string reads as zero.
            Value::String(s) if s.trim().is_empty() => 0.0,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        Some(Self { room_id })
    }
}

impl RoomSelection {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let room = serde_json::from_slice::<Value>(bytes)
            .ok()
            .as_ref()
            .and_then(RoomSelectionBody::from_json)
            .filter(|body| body.validate().is_ok())
            .map(|body| RoomRef::from_number(body.room_id));
        Self(room)
    }
}

impl<S> FromRequest<S> for RoomSelection
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self::from_bytes(&bytes)),
            Err(rejection) => {
                debug!("Unreadable request body: {}", rejection);
                Ok(Self(None))
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
