use async_trait::async_trait;

use super::normalize_email;
use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInCommandError {
    #[error("A valid email address is required")]
    InvalidEmail,

    #[error("Password is required")]
    EmptyPassword,
}

#[derive(Clone)]
pub struct SignInCommand {
    email: String,
    password: String,
}

impl SignInCommand {
    pub fn new(email: &str, password: String) -> Result<Self, SignInCommandError> {
        let email = normalize_email(email).ok_or(SignInCommandError::InvalidEmail)?;
        if password.is_empty() {
            return Err(SignInCommandError::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone)]
pub struct SignInResult {
    pub session: Session,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email address has not been confirmed")]
    EmailNotConfirmed,

    #[error("Issued token could not be verified: {0}")]
    TokenRejected(String),

    #[error("Auth service error: {0}")]
    GatewayError(String),
}

#[async_trait]
pub trait SignInUseCase: Send + Sync {
    async fn execute(&self, command: SignInCommand) -> Result<SignInResult, SignInError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_normalizes_email() {
        let cmd = SignInCommand::new(" Admin@Example.com", "secret".into()).unwrap();
        assert_eq!(cmd.email(), "admin@example.com");
        assert_eq!(cmd.password(), "secret");
    }

    #[test]
    fn command_requires_password() {
        assert_eq!(
            SignInCommand::new("a@b.co", String::new()).err(),
            Some(SignInCommandError::EmptyPassword)
        );
    }
}
