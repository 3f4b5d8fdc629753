use actix_web::{patch, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::content::application::controller::ControllerError;
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::{Submission, SubmissionStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: SubmissionStatus,
}

/// Set a submission's lifecycle status. Admin-only: the submitter can never
/// touch status, intake always creates records as "not started".
#[patch("/api/admin/submissions/{id}/status")]
pub async fn update_submission_status_handler(
    _session: AdminSession,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(id) = path.into_inner().parse::<Identity>() else {
        return ApiResponse::bad_request("INVALID_ID", "Not a valid submission id");
    };

    let controller = data.dashboard.controller::<Submission>();
    controller.load(false).await;

    let mut draft = match controller.begin_edit(id).await {
        Ok(draft) => draft,
        Err(ControllerError::UnknownItem) => {
            return ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found")
        }
        Err(_) => return ApiResponse::internal_error(),
    };

    draft.status = body.status;

    match controller.save(draft).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(ControllerError::OperationInFlight) => ApiResponse::conflict(
            "OPERATION_IN_FLIGHT",
            "An operation is already in flight for this submission",
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to update submission status");
            ApiResponse::internal_error()
        }
    }
}
