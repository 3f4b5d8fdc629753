use serde_json::json;
use uuid::Uuid;

use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::{
    Profile, Record, ServiceOffering, Submission, SubmissionStatus,
};

pub fn persisted_service(title: &str, order: i32) -> ServiceOffering {
    ServiceOffering {
        id: Identity::persisted(Uuid::new_v4()),
        title: title.to_string(),
        description: "desc".to_string(),
        icon: "bolt".to_string(),
        display_order: order,
    }
}

pub fn persisted_submission(project_name: &str) -> Submission {
    let mut submission = Submission::blank();
    submission.id = Identity::persisted(Uuid::new_v4());
    submission.requester_name = "Ada Lovelace".to_string();
    submission.requester_email = "ada@example.com".to_string();
    submission.requester_phone = "+5511999990000".to_string();
    submission.is_whatsapp = true;
    submission.status = SubmissionStatus::NotStarted;
    submission
        .answers
        .insert("projectName".to_string(), json!(project_name));
    submission
}

pub fn persisted_profile(display_name: &str) -> Profile {
    Profile {
        id: Identity::persisted(Uuid::new_v4()),
        display_name: display_name.to_string(),
        headline: "Full-stack developer".to_string(),
        bio: "Building things".to_string(),
        contact_phone: "+5511999990000".to_string(),
        contact_email: "igor@example.com".to_string(),
        linkedin_url: None,
    }
}
