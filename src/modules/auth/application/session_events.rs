//! Explicit publish/subscribe channel for auth-state changes.
//!
//! Owned by the application root. Subscribers receive every
//! [`AuthStateChange`] published after they subscribed.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{AuthEvent, AuthStateChange, Session, UserId};

const DEFAULT_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<AuthStateChange>,
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SessionEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthStateChange> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the change.
    pub fn publish(&self, change: AuthStateChange) -> usize {
        // No subscribers is not an error.
        self.sender.send(change).unwrap_or(0)
    }

    pub fn publish_session(&self, event: AuthEvent, session: &Session) -> usize {
        self.publish(AuthStateChange {
            event,
            user_id: Some(session.user_id),
            session: Some(session.clone()),
        })
    }

    pub fn publish_without_session(&self, event: AuthEvent, user_id: Option<UserId>) -> usize {
        self.publish(AuthStateChange {
            event,
            user_id,
            session: None,
        })
    }

    /// Logs every change until the channel closes or the handle is aborted.
    pub fn spawn_audit_listener(&self) -> JoinHandle<()> {
        let mut receiver = self.subscribe();
        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(change) => {
                        let user = change
                            .user_id
                            .map(|id| id.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        info!(
                            event = %change.event,
                            user_id = %user,
                            has_session = change.session.is_some(),
                            "Auth state changed"
                        );
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("Auth audit listener skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}
