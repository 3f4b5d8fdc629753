use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::auth::application::use_cases::fetch_session::FetchSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

/// Current session
///
/// Resolves the bearer token to the admin it belongs to. The SPA calls this
/// on boot to decide between the login form and the dashboard.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Active session", body = inline(SuccessResponse<SessionResponse>)),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_session_use_case.execute(session.admin_id).await {
        Ok(info) => ApiResponse::success(SessionResponse {
            id: info.id.to_string(),
            email: info.email,
            display_name: info.display_name,
        }),

        Err(FetchSessionError::NotFound) => {
            ApiResponse::unauthorized("SESSION_ADMIN_GONE", "Session admin no longer exists")
        }

        Err(FetchSessionError::QueryError(e)) => {
            error!(error = %e, "Session lookup failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::TokenProvider;
    use crate::modules::auth::application::use_cases::fetch_session::FetchSessionUseCase;
    use crate::modules::auth::application::use_cases::login_admin::AdminInfo;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_token, test_token_provider};

    struct MockFetchSession {
        result: Result<AdminInfo, FetchSessionError>,
    }

    #[async_trait]
    impl FetchSessionUseCase for MockFetchSession {
        async fn execute(&self, _admin_id: Uuid) -> Result<AdminInfo, FetchSessionError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_session_with_valid_token() {
        let admin_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_fetch_session(MockFetchSession {
                result: Ok(AdminInfo {
                    id: admin_id,
                    email: "admin@example.com".to_string(),
                    display_name: "Admin".to_string(),
                }),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> = test_token_provider();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", bearer_token(admin_id)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "admin@example.com");
    }

    #[actix_web::test]
    async fn test_session_without_token_is_401() {
        let state = TestAppStateBuilder::default().build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> = test_token_provider();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(token_provider))
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/session").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
