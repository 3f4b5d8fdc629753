use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Landing page payload
///
/// Public aggregate of profile, projects, services, competencies and
/// journey. Sections degrade to empty on backend trouble; this endpoint
/// never errors because of the store.
#[utoipa::path(
    get,
    path = "/api/landing",
    tag = "landing",
    responses(
        (status = 200, description = "Landing page content"),
    )
)]
#[get("/api/landing")]
pub async fn get_landing_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.landing.snapshot().await)
}
