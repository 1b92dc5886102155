use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::AuthEvent,
    ports::{
        incoming::use_cases::{SignInCommand, SignInError, SignInResult, SignInUseCase},
        outgoing::{AuthGateway, AuthGatewayError, TokenVerifier},
    },
    session_events::SessionEvents,
};

pub struct SignInService<G>
where
    G: AuthGateway,
{
    gateway: G,
    verifier: Arc<dyn TokenVerifier>,
    events: SessionEvents,
}

impl<G> SignInService<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: G, verifier: Arc<dyn TokenVerifier>, events: SessionEvents) -> Self {
        Self {
            gateway,
            verifier,
            events,
        }
    }
}

#[async_trait]
impl<G> SignInUseCase for SignInService<G>
where
    G: AuthGateway + Send + Sync,
{
    async fn execute(&self, command: SignInCommand) -> Result<SignInResult, SignInError> {
        let tokens = self
            .gateway
            .sign_in(command.email(), command.password())
            .await
            .map_err(|e| match e {
                AuthGatewayError::InvalidCredentials => SignInError::InvalidCredentials,
                AuthGatewayError::EmailNotConfirmed => SignInError::EmailNotConfirmed,
                other => SignInError::GatewayError(other.to_string()),
            })?;

        // Role and expiry come from the token itself, like every other request.
        let session = self.verifier.verify(&tokens.access_token).map_err(|e| {
            warn!("Freshly issued token for {} failed verification: {}", command.email(), e);
            SignInError::TokenRejected(e.to_string())
        })?;

        self.events.publish_session(AuthEvent::SignedIn, &session);
        info!(user_id = %session.user_id, admin = session.is_admin(), "Signed in");

        Ok(SignInResult {
            session,
            refresh_token: tokens.refresh_token,
        })
    }
}
