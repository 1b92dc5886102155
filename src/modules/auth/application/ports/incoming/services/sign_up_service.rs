use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    domain::entities::{AuthEvent, UserId},
    ports::{
        incoming::use_cases::{SignUpCommand, SignUpError, SignUpResult, SignUpUseCase},
        outgoing::{AuthGateway, AuthGatewayError},
    },
    session_events::SessionEvents,
};

pub struct SignUpService<G>
where
    G: AuthGateway,
{
    gateway: G,
    events: SessionEvents,
}

impl<G> SignUpService<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: G, events: SessionEvents) -> Self {
        Self { gateway, events }
    }
}

#[async_trait]
impl<G> SignUpUseCase for SignUpService<G>
where
    G: AuthGateway + Send + Sync,
{
    async fn execute(&self, command: SignUpCommand) -> Result<SignUpResult, SignUpError> {
        let profile = command.profile();
        let outcome = self.gateway.sign_up(profile).await.map_err(|e| match e {
            AuthGatewayError::AlreadyRegistered => SignUpError::AlreadyRegistered,
            AuthGatewayError::Rejected(msg) => SignUpError::Rejected(msg),
            other => SignUpError::GatewayError(other.to_string()),
        })?;

        let user_id = outcome.user.id;
        let confirmation_pending = outcome.session.is_none();

        self.events
            .publish_without_session(AuthEvent::SignedUp, Some(UserId::from(user_id)));
        info!(
            user_id = %user_id,
            confirmation_pending,
            "Registered new account"
        );

        Ok(SignUpResult {
            user_id,
            email: outcome.user.email.unwrap_or_else(|| profile.email.clone()),
            confirmation_pending,
        })
    }
}
