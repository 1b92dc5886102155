use chrono::DateTime;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{Session, UserId, UserRole},
    ports::outgoing::{TokenError, TokenVerifier},
};

use super::jwt_config::JwtConfig;

const ANON_ROLE: &str = "anon";
const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

/// Claims of an access token issued by the hosted auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub aud: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

#[derive(Clone)]
pub struct JwtTokenVerifier {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenVerifier")
            .field("audience", &self.config.audience)
            .finish()
    }
}

impl JwtTokenVerifier {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    fn role_for(&self, claims: &SupabaseClaims) -> UserRole {
        let by_metadata = claims.app_metadata.role.as_deref() == Some(ADMIN_ROLE);
        let by_email = claims
            .email
            .as_deref()
            .is_some_and(|e| self.config.is_admin_email(e));

        if by_metadata || by_email {
            UserRole::Admin
        } else {
            UserRole::Member
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<Session, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.set_audience(&[self.config.audience.as_str()]);

        let decoded =
            decode::<SupabaseClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::Expired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::NotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Token verification failed: Unexpected audience");
                        TokenError::InvalidAudience
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::Malformed
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {}", e);
                        TokenError::Malformed
                    }
                }
            })?;

        let claims = decoded.claims;
        if claims.role.as_deref() == Some(ANON_ROLE) {
            return Err(TokenError::Anonymous);
        }

        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::Malformed)?;

        Ok(Session {
            user_id: UserId::from(claims.sub),
            role: self.role_for(&claims),
            email: claims.email,
            access_token: token.to_string(),
            expires_at,
        })
    }
}
