use actix_web::{get, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The dashboard's transient notice slot. At most one notice; `null` once it
/// expired or nothing was posted.
#[get("/api/admin/notice")]
pub async fn get_notice_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.dashboard.notices().current())
}
