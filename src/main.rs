pub mod api;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;
pub use modules::intake;
pub mod health;

use crate::auth::adapter::outgoing::admin_query_postgres::AdminQueryPostgres;
use crate::auth::adapter::outgoing::admin_repository_postgres::AdminRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::bootstrap_admin::BootstrapAdminService;
use crate::auth::application::use_cases::fetch_session::{
    FetchSessionService, FetchSessionUseCase,
};
use crate::auth::application::use_cases::login_admin::{LoginAdminService, LoginAdminUseCase};
use crate::auth::application::use_cases::logout_admin::{LogoutAdminService, LogoutAdminUseCase};
use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenService, RefreshTokenUseCase,
};

use crate::content::adapter::outgoing::competency_gateway_postgres::CompetencyGatewayPostgres;
use crate::content::adapter::outgoing::journey_gateway_postgres::JourneyGatewayPostgres;
use crate::content::adapter::outgoing::profile_gateway_postgres::ProfileGatewayPostgres;
use crate::content::adapter::outgoing::project_gateway_postgres::ProjectGatewayPostgres;
use crate::content::adapter::outgoing::service_gateway_postgres::ServiceGatewayPostgres;
use crate::content::adapter::outgoing::submission_gateway_postgres::SubmissionGatewayPostgres;
use crate::content::application::dashboard::{Dashboard, DashboardGateways};
use crate::content::application::landing::LandingService;
use crate::content::domain::records::{
    Competency, JourneyEntry, PortfolioProject, Profile, ServiceOffering, Submission,
};

use crate::intake::application::submit_intake::{SubmitIntakeService, SubmitIntakeUseCase};
use crate::intake::domain::form::{requirement_form, FormField};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub landing: Arc<LandingService>,
    pub login_admin_use_case: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub logout_admin_use_case: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub fetch_session_use_case: Arc<dyn FetchSessionUseCase + Send + Sync>,
    pub submit_intake_use_case: Arc<dyn SubmitIntakeUseCase + Send + Sync>,
    pub intake_form: Arc<Vec<FormField>>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading: try .env.{environment} first, then .env
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{environment}");
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    let redis_arc = Arc::new(redis_pool);

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());
    let admin_query = AdminQueryPostgres::new(Arc::clone(&db_arc));
    let admin_repo = AdminRepositoryPostgres::new(Arc::clone(&db_arc));
    let blacklist = RedisTokenBlacklist::new(Arc::clone(&redis_arc));

    // First-start provisioning of the single operator account
    let bootstrap = BootstrapAdminService::new(
        admin_query.clone(),
        admin_repo,
        Arc::clone(&password_hasher),
    );
    if let Err(e) = bootstrap
        .run(
            env::var("ADMIN_EMAIL").ok(),
            env::var("ADMIN_PASSWORD").ok(),
            env::var("ADMIN_DISPLAY_NAME").ok(),
        )
        .await
    {
        tracing::error!(error = %e, "admin bootstrap failed; login will not work until fixed");
    }

    let login_admin_use_case = LoginAdminService::new(
        admin_query.clone(),
        Arc::clone(&password_hasher),
        Arc::new(jwt_service.clone()),
    );
    let logout_admin_use_case =
        LogoutAdminService::new(blacklist.clone(), Arc::new(jwt_service.clone()));
    let refresh_token_use_case =
        RefreshTokenService::new(blacklist, Arc::new(jwt_service.clone()));
    let fetch_session_use_case = FetchSessionService::new(admin_query);

    // Content gateways
    let submissions: Arc<SubmissionGatewayPostgres> =
        Arc::new(SubmissionGatewayPostgres::new(Arc::clone(&db_arc)));
    let projects = Arc::new(ProjectGatewayPostgres::new(Arc::clone(&db_arc)));
    let services = Arc::new(ServiceGatewayPostgres::new(Arc::clone(&db_arc)));
    let competencies = Arc::new(CompetencyGatewayPostgres::new(Arc::clone(&db_arc)));
    let journey = Arc::new(JourneyGatewayPostgres::new(Arc::clone(&db_arc)));
    let profile = Arc::new(ProfileGatewayPostgres::new(Arc::clone(&db_arc)));

    let dashboard = Arc::new(Dashboard::new(DashboardGateways {
        submissions: submissions.clone(),
        projects: projects.clone(),
        services: services.clone(),
        competencies: competencies.clone(),
        journey: journey.clone(),
        profile: profile.clone(),
    }));

    let landing = Arc::new(LandingService::new(
        profile,
        projects,
        services,
        competencies,
        journey,
    ));

    // Intake
    let intake_form = Arc::new(requirement_form());
    let submit_intake_use_case = Arc::new(SubmitIntakeService::new(
        Arc::clone(&intake_form),
        submissions,
    ));

    let state = AppState {
        dashboard,
        landing,
        login_admin_use_case: Arc::new(login_admin_use_case),
        logout_admin_use_case: Arc::new(logout_admin_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        fetch_session_use_case: Arc::new(fetch_session_use_case),
        submit_intake_use_case,
        intake_form,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::content::adapter::incoming::web::routes as content_routes;
    use crate::intake::adapter::incoming::web::routes as intake_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Public
    cfg.service(content_routes::get_landing_handler);
    cfg.service(intake_routes::get_intake_form_handler);
    cfg.service(intake_routes::submit_intake_handler);

    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);

    // Admin dashboard: one generic CRUD surface per collection
    content_routes::register_admin_resource::<Submission>(cfg);
    content_routes::register_admin_resource::<PortfolioProject>(cfg);
    content_routes::register_admin_resource::<ServiceOffering>(cfg);
    content_routes::register_admin_resource::<Competency>(cfg);
    content_routes::register_admin_resource::<JourneyEntry>(cfg);
    content_routes::register_admin_resource::<Profile>(cfg);

    cfg.service(content_routes::update_submission_status_handler);
    cfg.service(content_routes::get_notice_handler);
    cfg.service(intake_routes::get_submission_report_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
