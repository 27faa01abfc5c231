//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, check_ins, health, venues};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nightspot API",
        version = "0.3.0",
        description = "Nightlife check-in and venue popularity REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Check-ins
        check_ins::create_check_in,
        check_ins::list_my_check_ins,
        // Venues
        venues::list_ranked,
        venues::get_venue,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            crate::models::user::User,
            crate::models::user::CreateUser,
            // Check-ins
            check_ins::CreateCheckInRequest,
            check_ins::CheckInResponse,
            crate::models::check_in::CheckIn,
            // Venues
            crate::models::venue::Venue,
            crate::models::venue::VenueWithCount,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "check_ins", description = "Daily check-in issuance"),
        (name = "venues", description = "Venue directory and popularity ranking")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
