use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::{Session, UserId, UserRole};

/// The verified session as the backend sees it. Never carries the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub user_id: UserId,
    pub email: Option<String>,
    pub role: UserRole,
    pub is_admin: bool,
    pub expires_at: DateTime<Utc>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id,
            email: session.email.clone(),
            role: session.role,
            is_admin: session.is_admin(),
            expires_at: session.expires_at,
        }
    }
}

pub trait CurrentSessionUseCase: Send + Sync {
    fn execute(&self, session: &Session) -> SessionView;
}
