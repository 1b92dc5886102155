use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    user_id: String,

    #[schema(example = "admin@temple.org")]
    email: Option<String>,

    #[schema(example = "admin")]
    role: String,

    is_admin: bool,

    #[schema(value_type = String, format = DateTime)]
    expires_at: DateTime<Utc>,
}

/// Current session
///
/// Returns the session the backend derived from the bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active session", body = inline(SuccessResponse<SessionResponse>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn current_session_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let view = data.auth.current_session.execute(&user.session);
    let role = if view.is_admin { "admin" } else { "member" };

    ApiResponse::success(SessionResponse {
        user_id: view.user_id.to_string(),
        email: view.email,
        role: role.to_string(),
        is_admin: view.is_admin,
        expires_at: view.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{admin_token_verifier, StubTokenVerifier};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_current_session_for_admin() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(admin_token_verifier())
                .service(current_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", "Bearer test-access-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["role"], "admin");
        assert_eq!(body["data"]["is_admin"], true);
        assert!(body["data"].get("access_token").is_none());
    }

    #[actix_web::test]
    async fn test_current_session_for_member() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(StubTokenVerifier::member().into_data())
                .service(current_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", "Bearer member-token"))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["data"]["role"], "member");
    }
}
