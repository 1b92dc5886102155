use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued for another audience")]
    InvalidAudience,

    #[error("Token does not belong to a signed-in user")]
    Anonymous,

    #[error("Malformed token")]
    Malformed,
}

/// Turns a bearer token into the caller's [`Session`].
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Session, TokenError>;
}
