use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SignOutResponse {
    #[schema(example = "Signed out")]
    message: String,
}

/// Sign out
///
/// Revokes the caller's session with the hosted auth service.
#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed out", body = inline(SuccessResponse<SignOutResponse>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Auth service unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/sign-out")]
pub async fn sign_out_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.sign_out.execute(&user.session).await {
        Ok(()) => ApiResponse::success(SignOutResponse {
            message: "Signed out".to_string(),
        }),
        Err(e) => {
            error!(error = %e, user_id = %user.session.user_id, "Sign-out failed");
            ApiResponse::bad_gateway("AUTH_SERVICE_ERROR", "Auth service is unavailable")
        }
    }
}
