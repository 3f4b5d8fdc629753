use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::{Record, Submission};
use crate::modules::intake::application::report::render_report;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct ReportResponse {
    report: String,
}

/// Markdown requirements report for one submission (copy/print surface).
#[get("/api/admin/submissions/{id}/report")]
pub async fn get_submission_report_handler(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id: Identity = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return ApiResponse::bad_request("INVALID_ID", "Not a valid submission id"),
    };

    let controller = data.dashboard.controller::<Submission>();
    let submission = controller
        .load(false)
        .await
        .into_iter()
        .find(|s| s.identity() == id);

    match submission {
        Some(submission) => ApiResponse::success(ReportResponse {
            report: render_report(&submission, &data.intake_form),
        }),
        None => ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found"),
    }
}
