use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginAdminInfo, LoginRequestDto, LoginResponse, LogoutRequestDto, RefreshTokenRequestDto,
    RefreshTokenResponse, SessionResponse,
};
// Intake
use crate::modules::intake::adapter::incoming::web::routes::IntakeRequestDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio & Intake API",
        version = "1.0.0",
        description = "API documentation for the portfolio site, requirements intake and admin dashboard",
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::login_admin::login_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_admin::logout_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::modules::auth::adapter::incoming::web::routes::get_session::get_session_handler,

        // Public endpoints
        crate::modules::content::adapter::incoming::web::routes::landing::get_landing_handler,
        crate::modules::intake::adapter::incoming::web::routes::get_form::get_intake_form_handler,
        crate::modules::intake::adapter::incoming::web::routes::submit_intake::submit_intake_handler,

        // Admin resource endpoints are generic over the collection type and
        // registered per resource; utoipa cannot derive paths for them.
        // list_resources, save_resource, delete_resource, ...
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LoginResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LoginAdminInfo,
            LogoutRequestDto,
            RefreshTokenRequestDto,
            RefreshTokenResponse,
            SessionResponse,

            // Intake DTOs
            IntakeRequestDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "landing", description = "Public landing page content"),
        (name = "intake", description = "Public requirements intake"),
        (name = "admin", description = "Dashboard CRUD endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
