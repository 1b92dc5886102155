use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    domain::entities::{AuthEvent, Session},
    ports::{
        incoming::use_cases::{SignOutError, SignOutUseCase},
        outgoing::AuthGateway,
    },
    session_events::SessionEvents,
};

pub struct SignOutService<G>
where
    G: AuthGateway,
{
    gateway: G,
    events: SessionEvents,
}

impl<G> SignOutService<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: G, events: SessionEvents) -> Self {
        Self { gateway, events }
    }
}

#[async_trait]
impl<G> SignOutUseCase for SignOutService<G>
where
    G: AuthGateway + Send + Sync,
{
    async fn execute(&self, session: &Session) -> Result<(), SignOutError> {
        self.gateway
            .sign_out(&session.access_token)
            .await
            .map_err(|e| SignOutError::GatewayError(e.to_string()))?;

        self.events
            .publish_without_session(AuthEvent::SignedOut, Some(session.user_id));
        info!(user_id = %session.user_id, "Signed out");
        Ok(())
    }
}
