use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use serde_json::{Map, Value};

use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::domain::records::{Record, Submission, SubmissionStatus};
use crate::modules::intake::domain::form::FormField;

#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldIssue {
    pub field_id: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IntakeError {
    #[error("Validation failed")]
    Validation(Vec<FieldIssue>),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Debug, Clone)]
pub struct IntakeRequest {
    pub requester_name: String,
    pub requester_email: String,
    pub requester_phone: String,
    pub is_whatsapp: bool,
    pub answers: Map<String, Value>,
}

/// Public, unauthenticated intake: validate, insert, done. The submitter
/// never sees the stored record, so nothing is returned on success.
#[async_trait]
pub trait SubmitIntakeUseCase: Send + Sync {
    async fn execute(&self, request: IntakeRequest) -> Result<(), IntakeError>;
}

pub struct SubmitIntakeService {
    form: Arc<Vec<FormField>>,
    gateway: Arc<dyn ResourceGateway<Submission>>,
}

impl SubmitIntakeService {
    pub fn new(form: Arc<Vec<FormField>>, gateway: Arc<dyn ResourceGateway<Submission>>) -> Self {
        Self { form, gateway }
    }

    fn validate(&self, request: &IntakeRequest) -> Vec<FieldIssue> {
        let mut issues = Vec::new();

        if request.requester_name.trim().is_empty() {
            issues.push(issue("requesterName", "Name is required"));
        }
        if !EmailAddress::is_valid(request.requester_email.trim()) {
            issues.push(issue("requesterEmail", "A valid email is required"));
        }
        if !phone_is_plausible(&request.requester_phone) {
            issues.push(issue("requesterPhone", "A valid phone number is required"));
        }

        // Required only applies to fields the submitter could actually see.
        for field in self.form.iter() {
            if field.required
                && field.is_visible(&request.answers)
                && answer_is_blank(request.answers.get(&field.id))
            {
                issues.push(issue(&field.id, "This field is required"));
            }
        }

        issues
    }
}

#[async_trait]
impl SubmitIntakeUseCase for SubmitIntakeService {
    async fn execute(&self, request: IntakeRequest) -> Result<(), IntakeError> {
        let issues = self.validate(&request);
        if !issues.is_empty() {
            return Err(IntakeError::Validation(issues));
        }

        let mut submission = Submission::blank();
        submission.requester_name = request.requester_name.trim().to_string();
        submission.requester_email = request.requester_email.trim().to_string();
        submission.requester_phone = normalize_phone(&request.requester_phone);
        submission.is_whatsapp = request.is_whatsapp;
        submission.answers = request.answers;
        submission.status = SubmissionStatus::NotStarted;

        // Fire-and-forget: the stored record is dropped on purpose.
        self.gateway.save(submission).await?;
        Ok(())
    }
}

fn issue(field_id: &str, message: &str) -> FieldIssue {
    FieldIssue {
        field_id: field_id.to_string(),
        message: message.to_string(),
    }
}

fn answer_is_blank(answer: Option<&Value>) -> bool {
    match answer {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn non_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\d]").expect("invalid regex"))
}

fn phone_is_plausible(raw: &str) -> bool {
    let digits = non_digits().replace_all(raw, "");
    (8..=15).contains(&digits.len())
}

/// Keep a leading + and the digits; drop separators and typos.
fn normalize_phone(raw: &str) -> String {
    let digits = non_digits().replace_all(raw, "");
    if raw.trim_start().starts_with('+') {
        format!("+{digits}")
    } else {
        digits.into_owned()
    }
}
