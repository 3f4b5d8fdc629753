use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::use_cases::fetch_session::FetchSessionUseCase;
use crate::modules::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::modules::auth::application::use_cases::logout_admin::LogoutAdminUseCase;
use crate::modules::auth::application::use_cases::refresh_token::RefreshTokenUseCase;
use crate::modules::content::application::dashboard::{Dashboard, DashboardGateways};
use crate::modules::content::application::landing::LandingService;
use crate::modules::content::application::ports::outgoing::gateway::ResourceGateway;
use crate::modules::content::domain::records::{
    Competency, JourneyEntry, PortfolioProject, Profile, ServiceOffering, Submission,
};
use crate::modules::intake::application::submit_intake::SubmitIntakeService;
use crate::modules::intake::domain::form::requirement_form;
use crate::tests::support::stubs::{
    InMemoryGateway, StubFetchSessionUseCase, StubLoginUseCase, StubLogoutUseCase,
    StubRefreshUseCase,
};
use crate::AppState;

/// Builds an `AppState` over seeded in-memory gateways, with stub auth use
/// cases that individual tests override as needed.
pub struct TestAppStateBuilder {
    submissions: Vec<Submission>,
    projects: Vec<PortfolioProject>,
    services: Vec<ServiceOffering>,
    competencies: Vec<Competency>,
    journey: Vec<JourneyEntry>,
    profile: Vec<Profile>,
    login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    fetch_session: Arc<dyn FetchSessionUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            submissions: Vec::new(),
            projects: Vec::new(),
            services: Vec::new(),
            competencies: Vec::new(),
            journey: Vec::new(),
            profile: Vec::new(),
            login: Arc::new(StubLoginUseCase),
            logout: Arc::new(StubLogoutUseCase),
            refresh: Arc::new(StubRefreshUseCase),
            fetch_session: Arc::new(StubFetchSessionUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_submissions(mut self, submissions: Vec<Submission>) -> Self {
        self.submissions = submissions;
        self
    }

    pub fn with_projects(mut self, projects: Vec<PortfolioProject>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_services(mut self, services: Vec<ServiceOffering>) -> Self {
        self.services = services;
        self
    }

    pub fn with_competencies(mut self, competencies: Vec<Competency>) -> Self {
        self.competencies = competencies;
        self
    }

    pub fn with_journey(mut self, journey: Vec<JourneyEntry>) -> Self {
        self.journey = journey;
        self
    }

    pub fn with_profile(mut self, profile: Vec<Profile>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_login(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutAdminUseCase + 'static) -> Self {
        self.logout = Arc::new(uc);
        self
    }

    pub fn with_refresh(mut self, uc: impl RefreshTokenUseCase + 'static) -> Self {
        self.refresh = Arc::new(uc);
        self
    }

    pub fn with_fetch_session(mut self, uc: impl FetchSessionUseCase + 'static) -> Self {
        self.fetch_session = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let submissions: Arc<dyn ResourceGateway<Submission>> =
            Arc::new(InMemoryGateway::new(self.submissions));
        let projects: Arc<dyn ResourceGateway<PortfolioProject>> =
            Arc::new(InMemoryGateway::new(self.projects));
        let services: Arc<dyn ResourceGateway<ServiceOffering>> =
            Arc::new(InMemoryGateway::new(self.services));
        let competencies: Arc<dyn ResourceGateway<Competency>> =
            Arc::new(InMemoryGateway::new(self.competencies));
        let journey: Arc<dyn ResourceGateway<JourneyEntry>> =
            Arc::new(InMemoryGateway::new(self.journey));
        let profile: Arc<dyn ResourceGateway<Profile>> =
            Arc::new(InMemoryGateway::new(self.profile));

        let dashboard = Arc::new(Dashboard::new(DashboardGateways {
            submissions: Arc::clone(&submissions),
            projects: Arc::clone(&projects),
            services: Arc::clone(&services),
            competencies: Arc::clone(&competencies),
            journey: Arc::clone(&journey),
            profile: Arc::clone(&profile),
        }));

        let landing = Arc::new(LandingService::new(
            Arc::clone(&profile),
            Arc::clone(&projects),
            Arc::clone(&services),
            Arc::clone(&competencies),
            Arc::clone(&journey),
        ));

        let intake_form = Arc::new(requirement_form());
        let submit_intake = Arc::new(SubmitIntakeService::new(
            Arc::clone(&intake_form),
            Arc::clone(&submissions),
        ));

        web::Data::new(AppState {
            dashboard,
            landing,
            login_admin_use_case: self.login,
            logout_admin_use_case: self.logout,
            refresh_token_use_case: self.refresh,
            fetch_session_use_case: self.fetch_session,
            submit_intake_use_case: submit_intake,
            intake_form,
        })
    }
}
