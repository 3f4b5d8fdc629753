use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::refresh_token::RefreshError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponse>)),
        (status = 401, description = "Invalid or revoked refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.refresh_token_use_case.execute(&dto.refresh_token).await {
        Ok(access_token) => ApiResponse::success(RefreshTokenResponse { access_token }),

        Err(RefreshError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }

        Err(RefreshError::Revoked) => {
            ApiResponse::unauthorized("REFRESH_TOKEN_REVOKED", "Refresh token has been revoked")
        }

        Err(RefreshError::BlacklistError(e)) => {
            error!(error = %e, "Refresh failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::auth::application::use_cases::refresh_token::RefreshTokenUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockRefresh {
        result: Result<String, RefreshError>,
    }

    #[async_trait]
    impl RefreshTokenUseCase for MockRefresh {
        async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_refresh_returns_new_access_token() {
        let state = TestAppStateBuilder::default()
            .with_refresh(MockRefresh {
                result: Ok("new_access".to_string()),
            })
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(refresh_token_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(json!({ "refresh_token": "refresh" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["access_token"], "new_access");
    }

    #[actix_web::test]
    async fn test_revoked_token_is_401() {
        let state = TestAppStateBuilder::default()
            .with_refresh(MockRefresh {
                result: Err(RefreshError::Revoked),
            })
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(refresh_token_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(json!({ "refresh_token": "refresh" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "REFRESH_TOKEN_REVOKED");
    }
}
