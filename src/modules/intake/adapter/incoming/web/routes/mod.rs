pub mod get_form;
pub mod submission_report;
pub mod submit_intake;

pub use get_form::get_intake_form_handler;
pub use submission_report::get_submission_report_handler;
pub use submit_intake::{submit_intake_handler, IntakeRequestDto};
