pub mod bootstrap_admin;
pub mod fetch_session;
pub mod login_admin;
pub mod logout_admin;
pub mod refresh_token;
