use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// The intake form definition
///
/// Public: the landing page renders the requirement form from this, so the
/// frontend never hardcodes the field set.
#[utoipa::path(
    get,
    path = "/api/intake/form",
    tag = "intake",
    responses(
        (status = 200, description = "Form field definitions"),
    )
)]
#[get("/api/intake/form")]
pub async fn get_intake_form_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.intake_form.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_form_definition_is_public() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new().app_data(state).service(get_intake_form_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/intake/form").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let fields = body["data"].as_array().unwrap();
        assert!(fields.iter().any(|f| f["id"] == "projectName"));
    }
}
