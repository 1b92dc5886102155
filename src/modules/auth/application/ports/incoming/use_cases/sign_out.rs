use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignOutError {
    #[error("Auth service error: {0}")]
    GatewayError(String),
}

#[async_trait]
pub trait SignOutUseCase: Send + Sync {
    async fn execute(&self, session: &Session) -> Result<(), SignOutError>;
}
