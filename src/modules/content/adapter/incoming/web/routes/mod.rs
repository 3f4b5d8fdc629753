pub mod admin_resources;
pub mod landing;
pub mod notice;
pub mod submission_status;

pub use admin_resources::register_admin_resource;
pub use landing::get_landing_handler;
pub use notice::get_notice_handler;
pub use submission_status::update_submission_status_handler;
