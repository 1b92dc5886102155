mod current_session_service;
mod sign_in_service;
mod sign_out_service;
mod sign_up_service;

pub use current_session_service::CurrentSessionService;
pub use sign_in_service::SignInService;
pub use sign_out_service::SignOutService;
pub use sign_up_service::SignUpService;
