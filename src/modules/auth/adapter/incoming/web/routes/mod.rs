pub mod get_session;
pub mod login_admin;
pub mod logout_admin;
pub mod refresh_token;

pub use get_session::{get_session_handler, SessionResponse};
pub use login_admin::{login_admin_handler, LoginRequestDto, LoginResponse, LoginAdminInfo};
pub use logout_admin::{logout_admin_handler, LogoutRequestDto};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto, RefreshTokenResponse};
