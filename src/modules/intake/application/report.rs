use serde_json::Value;

use crate::modules::content::domain::records::Submission;
use crate::modules::intake::domain::form::FormField;

/// Render one submission as the Markdown requirements report the dashboard
/// copies to the clipboard or prints.
///
/// A field section appears only when the answer exists AND the field's
/// visibility rule is satisfied by the stored answers; stale answers left
/// behind by toggling a controlling select never leak into the report.
pub fn render_report(submission: &Submission, fields: &[FormField]) -> String {
    let project_name = submission
        .answers
        .get("projectName")
        .and_then(Value::as_str)
        .unwrap_or("Untitled");

    let whatsapp_marker = if submission.is_whatsapp {
        " (WhatsApp)"
    } else {
        ""
    };

    let mut report = String::new();
    report.push_str("# Technical Requirements Report\n\n");
    report.push_str("## General Information\n");
    report.push_str(&format!("**Project:** {project_name}\n"));
    report.push_str(&format!(
        "**Current Status:** {}\n",
        submission.status.label()
    ));
    report.push_str(&format!(
        "**Requester:** {} ({})\n",
        submission.requester_name, submission.requester_email
    ));
    report.push_str(&format!(
        "**Contact Phone:** {}{whatsapp_marker}\n",
        submission.requester_phone
    ));
    report.push_str(&format!(
        "**Submitted:** {}\n\n",
        submission.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    report.push_str("---\n\n");
    report.push_str("## Scope & Design Details\n\n");

    for field in fields {
        let Some(answer) = submission.answers.get(&field.id) else {
            continue;
        };
        if answer_is_blank(answer) || !field.is_visible(&submission.answers) {
            continue;
        }

        report.push_str(&format!("### {}\n", field.label));
        report.push_str(&field.display_answer(answer));
        report.push_str("\n\n");
    }

    report
}

fn answer_is_blank(answer: &Value) -> bool {
    match answer {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
