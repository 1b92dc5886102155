mod current_session;
mod sign_in;
mod sign_out;
mod sign_up;

pub use current_session::{CurrentSessionUseCase, SessionView};
pub use sign_in::{SignInCommand, SignInCommandError, SignInError, SignInResult, SignInUseCase};
pub use sign_out::{SignOutError, SignOutUseCase};
pub use sign_up::{
    SignUpCommand, SignUpCommandError, SignUpError, SignUpResult, SignUpUseCase,
    MIN_PASSWORD_LENGTH,
};

/// Lowercased, trimmed email with a plausible `local@domain` shape.
pub(crate) fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || email.contains(' ') {
        return None;
    }
    Some(email)
}
