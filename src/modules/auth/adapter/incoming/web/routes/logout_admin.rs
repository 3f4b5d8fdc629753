use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::logout_admin::{LogoutError, LogoutRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    pub access_token: String,
    pub refresh_token: String,
}

/// Admin logout
///
/// Revokes both tokens; they stay blacklisted until they would have expired
/// anyway.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    responses(
        (status = 204, description = "Logged out"),
        (status = 400, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(
    req: web::Json<LogoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = LogoutRequest {
        access_token: dto.access_token,
        refresh_token: dto.refresh_token,
    };

    match data.logout_admin_use_case.execute(request).await {
        Ok(()) => ApiResponse::no_content(),

        Err(LogoutError::InvalidToken) => {
            ApiResponse::bad_request("INVALID_TOKEN", "Invalid token")
        }

        Err(LogoutError::BlacklistError(e)) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
