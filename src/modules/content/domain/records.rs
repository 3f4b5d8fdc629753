use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::identity::Identity;

/// The six dashboard collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Submissions,
    Projects,
    Services,
    Competencies,
    Journey,
    Profile,
}

impl ResourceKind {
    /// Singular label used in notices ("Service saved", "Could not delete project").
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Submissions => "submission",
            ResourceKind::Projects => "project",
            ResourceKind::Services => "service",
            ResourceKind::Competencies => "competency",
            ResourceKind::Journey => "journey entry",
            ResourceKind::Profile => "profile",
        }
    }
}

/// A record managed by the dashboard workspace machinery.
///
/// `display_order` returns `None` for collections without an explicit order
/// (submissions, projects, profile); ordered collections expose it so
/// append-at-end and reorder keep the column consistent with the visible
/// sequence.
pub trait Record: Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    fn identity(&self) -> Identity;
    fn set_identity(&mut self, id: Identity);

    fn display_order(&self) -> Option<i32> {
        None
    }

    fn set_display_order(&mut self, _order: i32) {}

    /// A blank record with a fresh pending identity, as materialized by
    /// the dashboard's create action.
    fn blank() -> Self;
}

// ──────────────────────────────────────────────────────────
// Submissions
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    NotStarted,
    Started,
    NeedsAdjustments,
    Finished,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::NotStarted => "not_started",
            SubmissionStatus::Started => "started",
            SubmissionStatus::NeedsAdjustments => "needs_adjustments",
            SubmissionStatus::Finished => "finished",
        }
    }

    /// Human label used in the requirements report.
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::NotStarted => "Not started",
            SubmissionStatus::Started => "Started",
            SubmissionStatus::NeedsAdjustments => "Needs adjustments",
            SubmissionStatus::Finished => "Finished",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind} value `{value}`")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl std::str::FromStr for SubmissionStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(SubmissionStatus::NotStarted),
            "started" => Ok(SubmissionStatus::Started),
            "needs_adjustments" => Ok(SubmissionStatus::NeedsAdjustments),
            "finished" => Ok(SubmissionStatus::Finished),
            other => Err(ParseEnumError {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// One requirements-intake submission. Status starts at `NotStarted` and is
/// only ever changed from the dashboard, never by the submitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Identity,
    pub requester_name: String,
    pub requester_email: String,
    pub requester_phone: String,
    pub is_whatsapp: bool,
    /// Free-form answers keyed by form field id.
    pub answers: Map<String, Value>,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Submission {
    const KIND: ResourceKind = ResourceKind::Submissions;

    fn identity(&self) -> Identity {
        self.id
    }

    fn set_identity(&mut self, id: Identity) {
        self.id = id;
    }

    fn blank() -> Self {
        Submission {
            id: Identity::pending(),
            requester_name: String::new(),
            requester_email: String::new(),
            requester_phone: String::new(),
            is_whatsapp: false,
            answers: Map::new(),
            status: SubmissionStatus::NotStarted,
            created_at: Utc::now(),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Portfolio projects
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: Identity,
    pub title: String,
    pub role: Option<String>,
    pub description: String,
    /// Comma-separated list, split into chips by the frontend.
    pub technologies: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
}

impl Record for PortfolioProject {
    const KIND: ResourceKind = ResourceKind::Projects;

    fn identity(&self) -> Identity {
        self.id
    }

    fn set_identity(&mut self, id: Identity) {
        self.id = id;
    }

    fn blank() -> Self {
        PortfolioProject {
            id: Identity::pending(),
            title: String::new(),
            role: None,
            description: String::new(),
            technologies: String::new(),
            github_url: None,
            live_url: None,
            image_url: None,
        }
    }
}

// ──────────────────────────────────────────────────────────
// Services
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: Identity,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub display_order: i32,
}

impl Record for ServiceOffering {
    const KIND: ResourceKind = ResourceKind::Services;

    fn identity(&self) -> Identity {
        self.id
    }

    fn set_identity(&mut self, id: Identity) {
        self.id = id;
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }

    fn set_display_order(&mut self, order: i32) {
        self.display_order = order;
    }

    fn blank() -> Self {
        ServiceOffering {
            id: Identity::pending(),
            title: String::new(),
            description: String::new(),
            icon: String::new(),
            display_order: 0,
        }
    }
}

// ──────────────────────────────────────────────────────────
// Competencies
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    Blue,
    #[default]
    Indigo,
    Cyan,
}

impl ColorTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Indigo => "indigo",
            ColorTheme::Cyan => "cyan",
        }
    }
}

impl std::str::FromStr for ColorTheme {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(ColorTheme::Blue),
            "indigo" => Ok(ColorTheme::Indigo),
            "cyan" => Ok(ColorTheme::Cyan),
            other => Err(ParseEnumError {
                kind: "color theme",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competency {
    pub id: Identity,
    pub title: String,
    pub subtitle: Option<String>,
    pub icon: String,
    /// Ordered bullet list rendered under the title.
    pub items: Vec<String>,
    pub color_theme: ColorTheme,
    pub display_order: i32,
}

impl Record for Competency {
    const KIND: ResourceKind = ResourceKind::Competencies;

    fn identity(&self) -> Identity {
        self.id
    }

    fn set_identity(&mut self, id: Identity) {
        self.id = id;
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }

    fn set_display_order(&mut self, order: i32) {
        self.display_order = order;
    }

    fn blank() -> Self {
        Competency {
            id: Identity::pending(),
            title: String::new(),
            subtitle: None,
            icon: String::new(),
            items: Vec::new(),
            color_theme: ColorTheme::default(),
            display_order: 0,
        }
    }
}

// ──────────────────────────────────────────────────────────
// Journey timeline
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyKind {
    Work,
    Education,
}

impl JourneyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyKind::Work => "work",
            JourneyKind::Education => "education",
        }
    }
}

impl std::str::FromStr for JourneyKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(JourneyKind::Work),
            "education" => Ok(JourneyKind::Education),
            other => Err(ParseEnumError {
                kind: "journey kind",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyEntry {
    pub id: Identity,
    pub title: String,
    pub company: Option<String>,
    pub period_label: Option<String>,
    pub description: String,
    pub kind: JourneyKind,
    pub display_order: i32,
}

impl Record for JourneyEntry {
    const KIND: ResourceKind = ResourceKind::Journey;

    fn identity(&self) -> Identity {
        self.id
    }

    fn set_identity(&mut self, id: Identity) {
        self.id = id;
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }

    fn set_display_order(&mut self, order: i32) {
        self.display_order = order;
    }

    fn blank() -> Self {
        JourneyEntry {
            id: Identity::pending(),
            title: String::new(),
            company: None,
            period_label: None,
            description: String::new(),
            kind: JourneyKind::Work,
            display_order: 0,
        }
    }
}

// ──────────────────────────────────────────────────────────
// Profile (singleton)
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Identity,
    pub display_name: String,
    pub headline: String,
    pub bio: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub linkedin_url: Option<String>,
}

impl Record for Profile {
    const KIND: ResourceKind = ResourceKind::Profile;

    fn identity(&self) -> Identity {
        self.id
    }

    fn set_identity(&mut self, id: Identity) {
        self.id = id;
    }

    fn blank() -> Self {
        Profile {
            id: Identity::pending(),
            display_name: String::new(),
            headline: String::new(),
            bio: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            linkedin_url: None,
        }
    }
}
