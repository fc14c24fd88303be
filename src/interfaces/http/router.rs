//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::BookingService;
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::request_id::request_id_middleware;

use super::modules::{booking, health};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token; `sub` is the numeric user id"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        booking::handlers::create_booking,
        booking::handlers::get_booking,
        booking::handlers::update_booking,
    ),
    components(
        schemas(
            health::HealthResponse,
            health::ComponentHealth,
            booking::dto::RoomSelectionRequest,
            booking::dto::BookingIdResponse,
            booking::dto::BookingDto,
            booking::dto::RoomDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Booking", description = "Hotel room bookings of the authenticated user"),
    ),
    info(
        title = "Hotel Booking API",
        description = "Book, view and change a hotel room for an enrolled event attendee",
    )
)]
pub struct ApiDoc;

/// Build the full HTTP application.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState { jwt_config };
    let booking_state = booking::BookingAppState {
        service: Arc::new(BookingService::new(repos)),
    };
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Booking routes (protected)
    let booking_routes = Router::new()
        .route(
            "/booking",
            get(booking::get_booking).post(booking::create_booking),
        )
        .route("/booking/{booking_id}", put(booking::update_booking))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(booking_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(booking_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_booking_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/booking"));
        assert!(doc.paths.paths.contains_key("/booking/{booking_id}"));
        assert!(doc.paths.paths.contains_key("/health"));
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
