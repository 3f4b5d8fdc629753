use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::intake::application::submit_intake::{IntakeError, IntakeRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct IntakeRequestDto {
    #[schema(example = "Ada Lovelace")]
    pub requester_name: String,

    #[schema(example = "ada@example.com")]
    pub requester_email: String,

    #[schema(example = "+55 11 99999-0000")]
    pub requester_phone: String,

    #[serde(default)]
    pub is_whatsapp: bool,

    /// Answers keyed by form field id
    #[schema(value_type = Object)]
    pub answers: Map<String, Value>,
}

/// Submit a requirements form
///
/// Public and fire-and-forget: a valid submission lands in the dashboard
/// with status "not started" and nothing but an acknowledgement comes back.
#[utoipa::path(
    post,
    path = "/api/intake",
    tag = "intake",
    request_body = IntakeRequestDto,
    responses(
        (status = 202, description = "Submission accepted"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/intake")]
pub async fn submit_intake_handler(
    req: web::Json<IntakeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = IntakeRequest {
        requester_name: dto.requester_name,
        requester_email: dto.requester_email,
        requester_phone: dto.requester_phone,
        is_whatsapp: dto.is_whatsapp,
        answers: dto.answers,
    };

    match data.submit_intake_use_case.execute(request).await {
        Ok(()) => HttpResponse::Accepted().finish(),

        Err(IntakeError::Validation(issues)) => {
            let detail = issues
                .iter()
                .map(|i| format!("{}: {}", i.field_id, i.message))
                .collect::<Vec<_>>()
                .join("; ");
            ApiResponse::bad_request("VALIDATION_ERROR", &detail)
        }

        Err(IntakeError::Gateway(e)) => {
            error!(error = %e, "Failed to store submission");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    fn valid_body() -> Value {
        json!({
            "requester_name": "Ada Lovelace",
            "requester_email": "ada@example.com",
            "requester_phone": "+55 11 99999-0000",
            "is_whatsapp": true,
            "answers": {
                "projectName": "Analytical Engine",
                "projectType": "system",
                "projectGoal": "Compute Bernoulli numbers",
                "hasDesign": "no",
                "features": "Punch card input",
                "deadline": "flexible"
            }
        })
    }

    #[actix_web::test]
    async fn test_valid_submission_is_accepted() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new().app_data(state).service(submit_intake_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/intake")
            .set_json(valid_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
    }

    #[actix_web::test]
    async fn test_missing_required_answer_is_400() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new().app_data(state).service(submit_intake_handler),
        )
        .await;

        let mut body = valid_body();
        body["answers"]
            .as_object_mut()
            .unwrap()
            .remove("projectName");

        let req = test::TestRequest::post()
            .uri("/api/intake")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("projectName"));
    }
}
