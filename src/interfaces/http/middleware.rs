//! Authentication middleware for Axum
//!
//! Every `/booking` route sits behind [`auth_middleware`]. Rejections are a
//! bare 401 with an empty body; the reason only goes to the log.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig};

/// Authentication error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
    /// Token verified, but `sub` is not a numeric user id
    InvalidSubject,
}

/// Authentication state containing the JWT config
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// The caller, as established by a valid bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the caller from an `Authorization` header value.
pub fn authenticate(
    auth_header: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<AuthenticatedUser, AuthError> {
    let auth_header = auth_header.ok_or(AuthError::MissingToken)?;
    let token = extract_token(auth_header).ok_or(AuthError::InvalidToken)?;

    let claims = verify_token(token, jwt_config).map_err(|e| {
        if matches!(
            e.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ) {
            AuthError::ExpiredToken
        } else {
            AuthError::InvalidToken
        }
    })?;
    if claims.is_expired() {
        return Err(AuthError::ExpiredToken);
    }

    let user_id = claims.user_id().ok_or(AuthError::InvalidSubject)?;
    Ok(AuthenticatedUser { user_id })
}

/// JWT bearer authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match authenticate(auth_header, &auth_state.jwt_config) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(error) => auth_error_response(error),
    }
}

fn auth_error_response(error: AuthError) -> Response {
    debug!(?error, "Rejecting unauthenticated request");
    StatusCode::UNAUTHORIZED.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::{create_token, TokenClaims};

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "middleware-secret".into(),
            expiration_hours: 1,
            issuer: "hotel-booking".into(),
        }
    }

    #[test]
    fn bearer_token_resolves_user() {
        let cfg = config();
        let header = format!("Bearer {}", create_token(17, &cfg).unwrap());
        assert_eq!(
            authenticate(Some(&header), &cfg),
            Ok(AuthenticatedUser { user_id: 17 })
        );
    }

    #[test]
    fn missing_and_malformed_headers_are_rejected() {
        let cfg = config();
        assert_eq!(authenticate(None, &cfg), Err(AuthError::MissingToken));
        assert_eq!(
            authenticate(Some("Basic dXNlcjpwYXNz"), &cfg),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(authenticate(Some("Bearer "), &cfg), Err(AuthError::InvalidToken));
        assert_eq!(
            authenticate(Some("Bearer not.a.jwt"), &cfg),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let cfg = config();
        let stale = JwtConfig {
            expiration_hours: -2,
            ..config()
        };
        let header = format!("Bearer {}", create_token(17, &stale).unwrap());
        assert_eq!(authenticate(Some(&header), &cfg), Err(AuthError::ExpiredToken));
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let cfg = config();
        let mut claims = TokenClaims::new(1, &cfg);
        claims.sub = "admin".into();
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(cfg.secret.as_bytes()),
        )
        .unwrap();

        let header = format!("Bearer {}", token);
        assert_eq!(
            authenticate(Some(&header), &cfg),
            Err(AuthError::InvalidSubject)
        );
    }
}
