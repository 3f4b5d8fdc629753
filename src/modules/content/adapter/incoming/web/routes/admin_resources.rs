use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::content::application::controller::ControllerError;
use crate::modules::content::application::dashboard::DashboardResource;
use crate::modules::content::application::ports::outgoing::gateway::GatewayError;
use crate::modules::content::domain::identity::Identity;
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// One generic CRUD surface for all six collections
// ──────────────────────────────────────────────────────────
//
// The handlers are generic over the resource type and registered once per
// collection; the URL segment comes from `DashboardResource::PATH`. Adding a
// collection is a `register_admin_resource::<NewType>(cfg)` call.

#[derive(Debug, Deserialize)]
pub struct LoadQuery {
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub new_index: usize,
}

pub async fn list_resources<R>(
    _session: AdminSession,
    query: web::Query<LoadQuery>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    R: DashboardResource + Serialize,
{
    let items = data.dashboard.controller::<R>().load(query.refresh).await;
    ApiResponse::success(items)
}

pub async fn save_resource<R>(
    _session: AdminSession,
    body: web::Json<R>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    R: DashboardResource + Serialize + DeserializeOwned,
{
    match data.dashboard.controller::<R>().save(body.into_inner()).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(e) => controller_error_response::<R>(e),
    }
}

pub async fn begin_create_resource<R>(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse
where
    R: DashboardResource + Serialize,
{
    let draft = data.dashboard.controller::<R>().begin_create().await;
    ApiResponse::created(draft)
}

pub async fn begin_edit_resource<R>(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    R: DashboardResource + Serialize,
{
    let Ok(id) = path.into_inner().parse::<Identity>() else {
        return ApiResponse::bad_request("INVALID_ID", "Not a valid record id");
    };

    match data.dashboard.controller::<R>().begin_edit(id).await {
        Ok(draft) => ApiResponse::success(draft),
        Err(e) => controller_error_response::<R>(e),
    }
}

pub async fn discard_draft_resource<R>(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    R: DashboardResource,
{
    let Ok(id) = path.into_inner().parse::<Identity>() else {
        return ApiResponse::bad_request("INVALID_ID", "Not a valid record id");
    };

    if data.dashboard.controller::<R>().discard(id).await {
        ApiResponse::no_content()
    } else {
        ApiResponse::not_found("DRAFT_NOT_FOUND", "No open draft for this record")
    }
}

pub async fn delete_resource<R>(
    _session: AdminSession,
    path: web::Path<String>,
    query: web::Query<DeleteQuery>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    R: DashboardResource,
{
    let Ok(id) = path.into_inner().parse::<Identity>() else {
        return ApiResponse::bad_request("INVALID_ID", "Not a valid record id");
    };

    match data
        .dashboard
        .controller::<R>()
        .delete(id, query.confirm)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => controller_error_response::<R>(e),
    }
}

pub async fn reorder_resource<R>(
    _session: AdminSession,
    path: web::Path<String>,
    body: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> HttpResponse
where
    R: DashboardResource + Serialize,
{
    let Ok(id) = path.into_inner().parse::<Identity>() else {
        return ApiResponse::bad_request("INVALID_ID", "Not a valid record id");
    };

    match data
        .dashboard
        .controller::<R>()
        .reorder(id, body.new_index)
        .await
    {
        Ok(items) => ApiResponse::success(items),
        Err(e) => controller_error_response::<R>(e),
    }
}

fn controller_error_response<R: DashboardResource>(e: ControllerError) -> HttpResponse {
    match e {
        ControllerError::OperationInFlight => ApiResponse::conflict(
            "OPERATION_IN_FLIGHT",
            "An operation is already in flight for this item",
        ),
        ControllerError::ConfirmationRequired => {
            ApiResponse::bad_request("CONFIRMATION_REQUIRED", "Delete requires confirm=true")
        }
        ControllerError::NotReorderable => {
            ApiResponse::bad_request("NOT_REORDERABLE", "This collection has no display order")
        }
        ControllerError::UnknownItem | ControllerError::Gateway(GatewayError::NotFound) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "No such item in this collection")
        }
        ControllerError::Gateway(e) => {
            error!(resource = R::PATH, error = %e, "Gateway error");
            ApiResponse::internal_error()
        }
    }
}

/// Mount the whole CRUD surface for one collection under
/// `/api/admin/{PATH}`.
pub fn register_admin_resource<R>(cfg: &mut web::ServiceConfig)
where
    R: DashboardResource + Serialize + DeserializeOwned,
{
    let base = format!("/api/admin/{}", R::PATH);

    cfg.service(
        web::resource(base.clone())
            .route(web::get().to(list_resources::<R>))
            .route(web::post().to(save_resource::<R>)),
    );
    cfg.service(
        web::resource(format!("{base}/draft")).route(web::post().to(begin_create_resource::<R>)),
    );
    cfg.service(
        web::resource(format!("{base}/{{id}}/edit"))
            .route(web::post().to(begin_edit_resource::<R>))
            .route(web::delete().to(discard_draft_resource::<R>)),
    );
    cfg.service(
        web::resource(format!("{base}/{{id}}/reorder"))
            .route(web::post().to(reorder_resource::<R>)),
    );
    cfg.service(
        web::resource(format!("{base}/{{id}}")).route(web::delete().to(delete_resource::<R>)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::TokenProvider;
    use crate::modules::content::domain::records::{Record, ServiceOffering};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_token, test_token_provider};
    use crate::tests::support::fixtures::persisted_service;

    fn token_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        web::Data::new(test_token_provider())
    }

    #[actix_web::test]
    async fn test_list_requires_auth() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/admin/services").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_list_returns_seeded_items() {
        let state = TestAppStateBuilder::default()
            .with_services(vec![persisted_service("Consulting", 1)])
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/services")
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["title"], "Consulting");
    }

    #[actix_web::test]
    async fn test_save_new_record_returns_persisted_identity() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        let mut draft = ServiceOffering::blank();
        draft.title = "Consulting".to_string();

        let req = test::TestRequest::post()
            .uri("/api/admin/services")
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .set_json(&draft)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_str().unwrap();
        assert!(!id.starts_with("draft-"));
    }

    #[actix_web::test]
    async fn test_delete_without_confirm_is_refused() {
        let item = persisted_service("Consulting", 1);
        let id = item.identity();
        let state = TestAppStateBuilder::default()
            .with_services(vec![item])
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/services/{id}"))
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CONFIRMATION_REQUIRED");
    }

    #[actix_web::test]
    async fn test_confirmed_delete_removes_item() {
        let item = persisted_service("Consulting", 1);
        let id = item.identity();
        let state = TestAppStateBuilder::default()
            .with_services(vec![item])
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        // Warm the workspace first, then delete
        let req = test::TestRequest::get()
            .uri("/api/admin/services")
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/services/{id}?confirm=true"))
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri("/api/admin/services")
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_draft_endpoint_returns_pending_identity() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/services/draft")
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["id"].as_str().unwrap().starts_with("draft-"));
    }

    #[actix_web::test]
    async fn test_edit_then_discard_roundtrip() {
        let item = persisted_service("Consulting", 1);
        let id = item.identity();
        let state = TestAppStateBuilder::default()
            .with_services(vec![item])
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        // Warm the workspace, open a draft, discard it
        let req = test::TestRequest::get()
            .uri("/api/admin/services")
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/admin/services/{id}/edit"))
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/services/{id}/edit"))
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_reorder_returns_renumbered_list() {
        let a = persisted_service("a", 1);
        let b = persisted_service("b", 2);
        let b_id = b.identity();
        let state = TestAppStateBuilder::default()
            .with_services(vec![a, b])
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/services")
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/admin/services/{b_id}/reorder"))
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .set_json(serde_json::json!({ "new_index": 0 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["title"], "b");
        assert_eq!(body["data"][0]["display_order"], 1);
    }

    #[actix_web::test]
    async fn test_garbage_id_is_400() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data())
                .configure(register_admin_resource::<ServiceOffering>),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/admin/services/garbage?confirm=true")
            .insert_header(("Authorization", bearer_token(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
