use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayUser {
    pub id: Uuid,
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct GatewayTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: GatewayUser,
}

impl std::fmt::Debug for GatewayTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayTokens")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("user", &self.user)
            .finish()
    }
}

/// Sign-up payload; `username` and `phone` travel as user metadata.
#[derive(Clone)]
pub struct SignUpProfile {
    pub email: String,
    pub password: String,
    pub username: String,
    pub phone: Option<String>,
}

/// `session` is `None` while the email confirmation is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySignUp {
    pub user: GatewayUser,
    pub session: Option<GatewayTokens>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthGatewayError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email address has not been confirmed")]
    EmailNotConfirmed,

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Auth transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str)
        -> Result<GatewayTokens, AuthGatewayError>;

    async fn sign_up(&self, profile: &SignUpProfile) -> Result<GatewaySignUp, AuthGatewayError>;

    /// Revokes the refresh tokens behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthGatewayError>;
}
