use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{SignUpCommand, SignUpError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SignUpRequestDto {
    #[schema(example = "devotee@temple.org")]
    pub email: String,

    #[schema(example = "secret1")]
    pub password: String,

    #[schema(example = "devotee")]
    pub username: String,

    #[schema(example = "+91 98765 43210")]
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct SignUpResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    user_id: String,

    #[schema(example = "devotee@temple.org")]
    email: String,

    /// True until the address is confirmed via the emailed link
    confirmation_pending: bool,

    message: String,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/sign-up",
    tag = "auth",
    request_body = SignUpRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<SignUpResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Already registered", body = ErrorResponse),
        (status = 502, description = "Auth service unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/sign-up")]
pub async fn sign_up_handler(
    req: web::Json<SignUpRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match SignUpCommand::new(
        &dto.email,
        dto.password,
        &dto.username,
        dto.phone.as_deref(),
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.sign_up.execute(command).await {
        Ok(result) => {
            let message = if result.confirmation_pending {
                "Registration successful! Please check your email to verify your account."
            } else {
                "Registration successful!"
            };
            ApiResponse::created(SignUpResponse {
                user_id: result.user_id.to_string(),
                email: result.email,
                confirmation_pending: result.confirmation_pending,
                message: message.to_string(),
            })
        }

        Err(SignUpError::AlreadyRegistered) => {
            warn!("Sign-up for an existing account");
            ApiResponse::conflict("ALREADY_REGISTERED", "User already registered")
        }

        Err(SignUpError::Rejected(ref msg)) => ApiResponse::bad_request("SIGN_UP_REJECTED", msg),

        Err(SignUpError::GatewayError(ref e)) => {
            error!(error = %e, "Auth service call failed");
            ApiResponse::bad_gateway("AUTH_SERVICE_ERROR", "Auth service is unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::{SignUpResult, SignUpUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockSignUp(Result<SignUpResult, SignUpError>);

    #[async_trait]
    impl SignUpUseCase for MockSignUp {
        async fn execute(&self, _command: SignUpCommand) -> Result<SignUpResult, SignUpError> {
            self.0.clone()
        }
    }

    async fn call(uc: MockSignUp, body: serde_json::Value) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_sign_up(uc).build();
        let app = test::init_service(App::new().app_data(app_state).service(sign_up_handler)).await;
        let req = test::TestRequest::post()
            .uri("/api/auth/sign-up")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn request() -> serde_json::Value {
        serde_json::json!({
            "email": "devotee@temple.org",
            "password": "secret1",
            "username": "devotee"
        })
    }

    #[actix_web::test]
    async fn test_sign_up_created_pending_confirmation() {
        let id = Uuid::new_v4();
        let (status, body) = call(
            MockSignUp(Ok(SignUpResult {
                user_id: id,
                email: "devotee@temple.org".into(),
                confirmation_pending: true,
            })),
            request(),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["user_id"], id.to_string());
        assert_eq!(body["data"]["confirmation_pending"], true);
    }

    #[actix_web::test]
    async fn test_sign_up_conflict() {
        let (status, body) = call(MockSignUp(Err(SignUpError::AlreadyRegistered)), request()).await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "ALREADY_REGISTERED");
    }

    #[actix_web::test]
    async fn test_sign_up_short_password() {
        let (status, body) = call(
            MockSignUp(Err(SignUpError::AlreadyRegistered)),
            serde_json::json!({ "email": "a@b.co", "password": "123", "username": "x" }),
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
