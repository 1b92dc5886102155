use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;

pub const MAX_COMMENT_LEN: usize = 2000;

const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub media_id: Uuid,
    pub user_id: Uuid,
    /// Display name captured when the comment was written.
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A validated comment ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub media_id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub text: String,
}

/// Username shown next to a comment: the local part of the account email.
pub fn author_name_for(session: &Session) -> String {
    session
        .email
        .as_deref()
        .and_then(|email| email.split('@').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(ANONYMOUS_AUTHOR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::media_fixtures::member_session;

    #[test]
    fn author_is_email_local_part() {
        assert_eq!(author_name_for(&member_session()), "devotee");
    }

    #[test]
    fn missing_email_is_anonymous() {
        let session = Session {
            email: None,
            ..member_session()
        };
        assert_eq!(author_name_for(&session), "Anonymous");

        let session = Session {
            email: Some("@example.com".into()),
            ..member_session()
        };
        assert_eq!(author_name_for(&session), "Anonymous");
    }
}
