mod current_session;
mod sign_in;
mod sign_out;
mod sign_up;

pub use current_session::{__path_current_session_handler, current_session_handler, SessionResponse};
pub use sign_in::{
    __path_sign_in_handler, sign_in_handler, SignInRequestDto, SignInResponse, SignInUserInfo,
};
pub use sign_out::{__path_sign_out_handler, sign_out_handler, SignOutResponse};
pub use sign_up::{__path_sign_up_handler, sign_up_handler, SignUpRequestDto, SignUpResponse};
