use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    AuthGateway, AuthGatewayError, GatewaySignUp, GatewayTokens, GatewayUser, SignUpProfile,
};
use crate::shared::supabase_config::SupabaseConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct UserBody {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionBody {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    user: UserBody,
}

/// Sign-up answers with a session when confirmation is disabled, with the bare
/// user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    Session(SessionBody),
    User(UserBody),
}

/// Error bodies vary between API versions; every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn code(&self) -> &str {
        self.error_code
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("")
    }

    fn message(&self) -> String {
        self.msg
            .as_deref()
            .or(self.error_description.as_deref())
            .or(self.message.as_deref())
            .or(self.error.as_deref())
            .unwrap_or("unknown error")
            .to_string()
    }
}

impl From<SessionBody> for GatewayTokens {
    fn from(body: SessionBody) -> Self {
        Self {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            expires_in: body.expires_in,
            user: body.user.into(),
        }
    }
}

impl From<UserBody> for GatewayUser {
    fn from(body: UserBody) -> Self {
        Self {
            id: body.id,
            email: body.email,
        }
    }
}

fn map_error(status: u16, body: &str) -> AuthGatewayError {
    let err = ErrorBody::parse(body);
    let message = err.message();
    let lower = message.to_lowercase();

    match (status, err.code()) {
        (_, "invalid_credentials") | (_, "invalid_grant") => AuthGatewayError::InvalidCredentials,
        (_, "email_not_confirmed") => AuthGatewayError::EmailNotConfirmed,
        (_, "user_already_exists") | (_, "email_exists") => AuthGatewayError::AlreadyRegistered,
        _ if lower.contains("already registered") => AuthGatewayError::AlreadyRegistered,
        (400..=499, _) => AuthGatewayError::Rejected(message),
        _ => AuthGatewayError::Transport(format!("HTTP {}: {}", status, message)),
    }
}

// ============================================================================
// Transport seam
// ============================================================================

struct GatewayResponse {
    status: u16,
    body: String,
}

#[async_trait]
trait GatewayTransport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: Value,
    ) -> Result<GatewayResponse, String>;
}

struct ReqwestGatewayTransport {
    client: reqwest::Client,
    anon_key: String,
}

#[async_trait]
impl GatewayTransport for ReqwestGatewayTransport {
    async fn post(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: Value,
    ) -> Result<GatewayResponse, String> {
        let token = bearer.unwrap_or(&self.anon_key);
        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(GatewayResponse { status, body })
    }
}

// ============================================================================
// Adapter
// ============================================================================

/// Auth gateway backed by the hosted auth REST API.
#[derive(Clone)]
pub struct SupabaseAuthGateway {
    config: SupabaseConfig,
    transport: Arc<dyn GatewayTransport>,
}

impl SupabaseAuthGateway {
    pub fn new(config: SupabaseConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build auth HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });
        let transport = Arc::new(ReqwestGatewayTransport {
            client,
            anon_key: config.anon_key.clone(),
        });
        Self { config, transport }
    }

    #[cfg(test)]
    fn with_transport(config: SupabaseConfig, transport: Arc<dyn GatewayTransport>) -> Self {
        Self { config, transport }
    }

    async fn call(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: Value,
    ) -> Result<String, AuthGatewayError> {
        let response = self
            .transport
            .post(&self.config.endpoint(path), bearer, body)
            .await
            .map_err(AuthGatewayError::Transport)?;

        if (200..300).contains(&response.status) {
            Ok(response.body)
        } else {
            tracing::debug!("Auth call {} failed with status {}", path, response.status);
            Err(map_error(response.status, &response.body))
        }
    }
}

fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, AuthGatewayError> {
    serde_json::from_str(body)
        .map_err(|e| AuthGatewayError::Transport(format!("Unexpected auth response: {}", e)))
}

#[async_trait]
impl AuthGateway for SupabaseAuthGateway {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<GatewayTokens, AuthGatewayError> {
        let body = self
            .call(
                "auth/v1/token?grant_type=password",
                None,
                json!({ "email": email, "password": password }),
            )
            .await?;
        decode::<SessionBody>(&body).map(GatewayTokens::from)
    }

    async fn sign_up(&self, profile: &SignUpProfile) -> Result<GatewaySignUp, AuthGatewayError> {
        let body = self
            .call(
                "auth/v1/signup",
                None,
                json!({
                    "email": profile.email,
                    "password": profile.password,
                    "data": {
                        "username": profile.username,
                        "phone": profile.phone,
                    },
                }),
            )
            .await?;

        Ok(match decode::<SignUpBody>(&body)? {
            SignUpBody::Session(session) => {
                let tokens = GatewayTokens::from(session);
                GatewaySignUp {
                    user: tokens.user.clone(),
                    session: Some(tokens),
                }
            }
            SignUpBody::User(user) => GatewaySignUp {
                user: user.into(),
                session: None,
            },
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthGatewayError> {
        self.call("auth/v1/logout", Some(access_token), json!({}))
            .await
            .map(|_| ())
    }
}
