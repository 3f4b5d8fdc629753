use std::sync::Arc;

use crate::modules::content::application::controller::ResourceController;
use crate::modules::content::application::notice::NoticeBoard;
use crate::modules::content::application::ports::outgoing::gateway::ResourceGateway;
use crate::modules::content::domain::records::{
    Competency, JourneyEntry, PortfolioProject, Profile, Record, ServiceOffering, Submission,
};

/// The six gateways the dashboard is wired with. Production hands in the
/// Postgres adapters; tests hand in stubs.
pub struct DashboardGateways {
    pub submissions: Arc<dyn ResourceGateway<Submission>>,
    pub projects: Arc<dyn ResourceGateway<PortfolioProject>>,
    pub services: Arc<dyn ResourceGateway<ServiceOffering>>,
    pub competencies: Arc<dyn ResourceGateway<Competency>>,
    pub journey: Arc<dyn ResourceGateway<JourneyEntry>>,
    pub profile: Arc<dyn ResourceGateway<Profile>>,
}

/// The admin dashboard: one controller per collection plus the shared
/// notice slot. The controllers are all the same generic implementation;
/// this struct is pure wiring.
pub struct Dashboard {
    notices: Arc<NoticeBoard>,
    submissions: ResourceController<Submission>,
    projects: ResourceController<PortfolioProject>,
    services: ResourceController<ServiceOffering>,
    competencies: ResourceController<Competency>,
    journey: ResourceController<JourneyEntry>,
    profile: ResourceController<Profile>,
}

impl Dashboard {
    pub fn new(gateways: DashboardGateways) -> Self {
        let notices = Arc::new(NoticeBoard::new());
        Dashboard {
            submissions: ResourceController::new(gateways.submissions, Arc::clone(&notices)),
            projects: ResourceController::new(gateways.projects, Arc::clone(&notices)),
            services: ResourceController::new(gateways.services, Arc::clone(&notices)),
            competencies: ResourceController::new(gateways.competencies, Arc::clone(&notices)),
            journey: ResourceController::new(gateways.journey, Arc::clone(&notices)),
            profile: ResourceController::new(gateways.profile, Arc::clone(&notices)),
            notices,
        }
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// The controller for `R`, resolved at compile time.
    pub fn controller<R: DashboardResource>(&self) -> &ResourceController<R> {
        R::controller(self)
    }
}

/// Marks a record type as one of the dashboard's six collections and names
/// its URL segment. Handlers are generic over this, so adding a collection
/// is wiring plus one impl, not another copy of the CRUD surface.
pub trait DashboardResource: Record {
    const PATH: &'static str;

    fn controller(dashboard: &Dashboard) -> &ResourceController<Self>;
}

impl DashboardResource for Submission {
    const PATH: &'static str = "submissions";

    fn controller(dashboard: &Dashboard) -> &ResourceController<Self> {
        &dashboard.submissions
    }
}

impl DashboardResource for PortfolioProject {
    const PATH: &'static str = "projects";

    fn controller(dashboard: &Dashboard) -> &ResourceController<Self> {
        &dashboard.projects
    }
}

impl DashboardResource for ServiceOffering {
    const PATH: &'static str = "services";

    fn controller(dashboard: &Dashboard) -> &ResourceController<Self> {
        &dashboard.services
    }
}

impl DashboardResource for Competency {
    const PATH: &'static str = "competencies";

    fn controller(dashboard: &Dashboard) -> &ResourceController<Self> {
        &dashboard.competencies
    }
}

impl DashboardResource for JourneyEntry {
    const PATH: &'static str = "journey";

    fn controller(dashboard: &Dashboard) -> &ResourceController<Self> {
        &dashboard.journey
    }
}

impl DashboardResource for Profile {
    const PATH: &'static str = "profile";

    fn controller(dashboard: &Dashboard) -> &ResourceController<Self> {
        &dashboard.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::InMemoryGateway;

    fn empty_dashboard() -> Dashboard {
        Dashboard::new(DashboardGateways {
            submissions: Arc::new(InMemoryGateway::new(vec![])),
            projects: Arc::new(InMemoryGateway::new(vec![])),
            services: Arc::new(InMemoryGateway::new(vec![])),
            competencies: Arc::new(InMemoryGateway::new(vec![])),
            journey: Arc::new(InMemoryGateway::new(vec![])),
            profile: Arc::new(InMemoryGateway::new(vec![])),
        })
    }

    #[tokio::test]
    async fn test_controllers_are_independent() {
        let dashboard = empty_dashboard();

        let draft = dashboard.controller::<ServiceOffering>().begin_create().await;
        assert_eq!(
            dashboard.controller::<ServiceOffering>().items().await.len(),
            1
        );
        assert!(dashboard
            .controller::<PortfolioProject>()
            .items()
            .await
            .is_empty());

        dashboard
            .controller::<ServiceOffering>()
            .delete(draft.identity(), true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_notice_slot_is_shared_across_controllers() {
        let dashboard = empty_dashboard();

        let mut draft = dashboard.controller::<ServiceOffering>().begin_create().await;
        draft.title = "Consulting".to_string();
        dashboard
            .controller::<ServiceOffering>()
            .save(draft)
            .await
            .unwrap();

        let notice = dashboard.notices().current().unwrap();
        assert!(notice.message.contains("service"));
    }

    #[test]
    fn test_path_segments_are_distinct() {
        let paths = [
            Submission::PATH,
            PortfolioProject::PATH,
            ServiceOffering::PATH,
            Competency::PATH,
            JourneyEntry::PATH,
            Profile::PATH,
        ];
        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }
}
