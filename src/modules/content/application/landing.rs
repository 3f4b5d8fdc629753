use std::sync::Arc;

use serde::Serialize;

use crate::modules::content::application::ports::outgoing::gateway::ResourceGateway;
use crate::modules::content::domain::records::{
    Competency, JourneyEntry, PortfolioProject, Profile, ServiceOffering,
};

/// Everything the public landing page needs, in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct LandingSnapshot {
    pub profile: Option<Profile>,
    pub projects: Vec<PortfolioProject>,
    pub services: Vec<ServiceOffering>,
    pub competencies: Vec<Competency>,
    pub journey: Vec<JourneyEntry>,
}

/// Public read path. Goes straight to the gateways: their fail-open `list`
/// means a backend outage renders the page with empty sections instead of an
/// error, and no admin workspace state is touched by anonymous traffic.
pub struct LandingService {
    profile: Arc<dyn ResourceGateway<Profile>>,
    projects: Arc<dyn ResourceGateway<PortfolioProject>>,
    services: Arc<dyn ResourceGateway<ServiceOffering>>,
    competencies: Arc<dyn ResourceGateway<Competency>>,
    journey: Arc<dyn ResourceGateway<JourneyEntry>>,
}

impl LandingService {
    pub fn new(
        profile: Arc<dyn ResourceGateway<Profile>>,
        projects: Arc<dyn ResourceGateway<PortfolioProject>>,
        services: Arc<dyn ResourceGateway<ServiceOffering>>,
        competencies: Arc<dyn ResourceGateway<Competency>>,
        journey: Arc<dyn ResourceGateway<JourneyEntry>>,
    ) -> Self {
        Self {
            profile,
            projects,
            services,
            competencies,
            journey,
        }
    }

    pub async fn snapshot(&self) -> LandingSnapshot {
        let (mut profiles, projects, services, competencies, journey) = futures::join!(
            self.profile.list(),
            self.projects.list(),
            self.services.list(),
            self.competencies.list(),
            self.journey.list(),
        );

        LandingSnapshot {
            profile: profiles.pop(),
            projects,
            services,
            competencies,
            journey,
        }
    }
}
