use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{SignInCommand, SignInError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Sign-in request from client
#[derive(Deserialize, ToSchema)]
pub struct SignInRequestDto {
    /// Email address
    #[schema(example = "admin@temple.org")]
    pub email: String,

    /// Password
    #[schema(example = "Admin123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignInResponse {
    /// Access token to send as `Authorization: Bearer ...`
    access_token: String,

    /// Refresh token for the hosted auth service
    refresh_token: String,

    /// When the access token stops being accepted
    #[schema(value_type = String, format = DateTime)]
    expires_at: DateTime<Utc>,

    user: SignInUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct SignInUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "admin@temple.org")]
    email: Option<String>,

    #[schema(example = "admin")]
    role: String,

    #[schema(example = true)]
    is_admin: bool,
}

/// Sign in
///
/// Exchanges email and password for a session with the hosted auth service.
#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    tag = "auth",
    request_body = SignInRequestDto,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<SignInResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Email not confirmed", body = ErrorResponse),
        (status = 502, description = "Auth service unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/sign-in")]
pub async fn sign_in_handler(
    req: web::Json<SignInRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match SignInCommand::new(&dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %command.email(), "Sign-in attempt");

    match data.auth.sign_in.execute(command).await {
        Ok(result) => {
            let session = result.session;
            let is_admin = session.is_admin();
            let role = if is_admin { "admin" } else { "member" };
            ApiResponse::success(SignInResponse {
                user: SignInUserInfo {
                    id: session.user_id.to_string(),
                    email: session.email.clone(),
                    role: role.to_string(),
                    is_admin,
                },
                access_token: session.access_token,
                refresh_token: result.refresh_token,
                expires_at: session.expires_at,
            })
        }

        Err(SignInError::InvalidCredentials) => {
            warn!("Sign-in failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(SignInError::EmailNotConfirmed) => {
            ApiResponse::forbidden("EMAIL_NOT_CONFIRMED", "Please confirm your email address first")
        }

        Err(SignInError::TokenRejected(ref e)) => {
            error!(error = %e, "Issued token rejected by verifier");
            ApiResponse::internal_error()
        }

        Err(SignInError::GatewayError(ref e)) => {
            error!(error = %e, "Auth service call failed");
            ApiResponse::bad_gateway("AUTH_SERVICE_ERROR", "Auth service is unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::{SignInResult, SignInUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::media_fixtures::active_session;
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockSignIn(Result<SignInResult, SignInError>);

    #[async_trait]
    impl SignInUseCase for MockSignIn {
        async fn execute(&self, _command: SignInCommand) -> Result<SignInResult, SignInError> {
            self.0.clone()
        }
    }

    async fn call(uc: MockSignIn, body: serde_json::Value) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_sign_in(uc).build();
        let app = test::init_service(App::new().app_data(app_state).service(sign_in_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/sign-in")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn credentials() -> serde_json::Value {
        serde_json::json!({ "email": "admin@temple.org", "password": "Admin123" })
    }

    #[actix_web::test]
    async fn test_sign_in_success() {
        let session = active_session();
        let (status, body) = call(
            MockSignIn(Ok(SignInResult {
                session: session.clone(),
                refresh_token: "refresh".into(),
            })),
            credentials(),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "test-access-token");
        assert_eq!(body["data"]["refresh_token"], "refresh");
        assert_eq!(body["data"]["user"]["id"], session.user_id.to_string());
        assert_eq!(body["data"]["user"]["is_admin"], true);
    }

    #[actix_web::test]
    async fn test_sign_in_invalid_credentials() {
        let (status, body) = call(MockSignIn(Err(SignInError::InvalidCredentials)), credentials()).await;
        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_sign_in_unconfirmed_email() {
        let (status, body) = call(MockSignIn(Err(SignInError::EmailNotConfirmed)), credentials()).await;
        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "EMAIL_NOT_CONFIRMED");
    }

    #[actix_web::test]
    async fn test_sign_in_gateway_failure() {
        let (status, body) = call(
            MockSignIn(Err(SignInError::GatewayError("timeout".into()))),
            credentials(),
        )
        .await;
        assert_eq!(status, 502);
        assert_eq!(body["error"]["code"], "AUTH_SERVICE_ERROR");
    }

    #[actix_web::test]
    async fn test_sign_in_rejects_bad_email() {
        let (status, body) = call(
            MockSignIn(Err(SignInError::InvalidCredentials)),
            serde_json::json!({ "email": "nobody", "password": "x" }),
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
