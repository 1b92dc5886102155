use async_trait::async_trait;
use uuid::Uuid;

use super::normalize_email;
use crate::auth::application::ports::outgoing::SignUpProfile;

pub const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_USERNAME_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpCommandError {
    #[error("A valid email address is required")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Username is required")]
    EmptyUsername,

    #[error("Username must be at most {max} characters")]
    UsernameTooLong { max: usize },
}

#[derive(Clone)]
pub struct SignUpCommand {
    profile: SignUpProfile,
}

impl SignUpCommand {
    pub fn new(
        email: &str,
        password: String,
        username: &str,
        phone: Option<&str>,
    ) -> Result<Self, SignUpCommandError> {
        let email = normalize_email(email).ok_or(SignUpCommandError::InvalidEmail)?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SignUpCommandError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        let username = username.trim();
        if username.is_empty() {
            return Err(SignUpCommandError::EmptyUsername);
        }
        if username.chars().count() > MAX_USERNAME_CHARS {
            return Err(SignUpCommandError::UsernameTooLong {
                max: MAX_USERNAME_CHARS,
            });
        }

        let phone = phone
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Self {
            profile: SignUpProfile {
                email,
                password,
                username: username.to_string(),
                phone,
            },
        })
    }

    pub fn profile(&self) -> &SignUpProfile {
        &self.profile
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    pub user_id: Uuid,
    pub email: String,
    pub confirmation_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Sign-up rejected: {0}")]
    Rejected(String),

    #[error("Auth service error: {0}")]
    GatewayError(String),
}

#[async_trait]
pub trait SignUpUseCase: Send + Sync {
    async fn execute(&self, command: SignUpCommand) -> Result<SignUpResult, SignUpError>;
}
