use actix_web::{http::StatusCode, post, web, Responder};
use serde::Serialize;
use serde_json::json;
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    multimedia::application::ports::incoming::use_cases::LikeMediaError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct LikeResponse {
    pub media_id: Uuid,
    /// Confirmed like count after this like
    #[schema(example = 4)]
    pub likes: i64,
}

/// Like a media item
#[utoipa::path(
    post,
    path = "/api/media/{id}/like",
    tag = "media",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Media id")),
    responses(
        (status = 200, description = "Like recorded", body = inline(SuccessResponse<LikeResponse>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Like rolled back; details carry the confirmed count", body = ErrorResponse),
    )
)]
#[post("/api/media/{id}/like")]
pub async fn like_media_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let media_id = path.into_inner();

    match data.multimedia.like.execute(&user.session, media_id).await {
        Ok(outcome) => ApiResponse::success(LikeResponse {
            media_id: outcome.media_id,
            likes: outcome.likes,
        }),
        Err(LikeMediaError::AuthRequired) => {
            ApiResponse::unauthorized("SESSION_REQUIRED", "Please sign in to like media")
        }
        Err(LikeMediaError::NotFound) => ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found"),
        Err(LikeMediaError::RolledBack { likes, reason }) => {
            warn!(media_id = %media_id, reason = %reason, "Like rolled back");
            ApiResponse::error_with_details(
                StatusCode::INTERNAL_SERVER_ERROR,
                "LIKE_FAILED",
                "Could not record like",
                json!({ "likes": likes }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::auth::application::domain::entities::Session;
    use crate::multimedia::application::ports::incoming::use_cases::{
        LikeMediaUseCase, LikeOutcome,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::admin_token_verifier;

    #[derive(Clone)]
    struct MockLike(Result<LikeOutcome, LikeMediaError>);

    #[async_trait]
    impl LikeMediaUseCase for MockLike {
        async fn execute(
            &self,
            _session: &Session,
            _media_id: Uuid,
        ) -> Result<LikeOutcome, LikeMediaError> {
            self.0.clone()
        }
    }

    async fn call(uc: MockLike, authorized: bool) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_like_media(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_verifier())
                .service(like_media_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri(&format!("/api/media/{}/like", Uuid::new_v4()));
        if authorized {
            req = req.insert_header(("Authorization", "Bearer test-access-token"));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_like_returns_confirmed_count() {
        let id = Uuid::new_v4();
        let (status, body) = call(
            MockLike(Ok(LikeOutcome {
                media_id: id,
                likes: 4,
            })),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["likes"], 4);
    }

    #[actix_web::test]
    async fn test_like_requires_sign_in() {
        let (status, _) = call(MockLike(Err(LikeMediaError::NotFound)), false).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_rolled_back_like_reports_confirmed_value() {
        let (status, body) = call(
            MockLike(Err(LikeMediaError::RolledBack {
                likes: 3,
                reason: "timeout".into(),
            })),
            true,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "LIKE_FAILED");
        assert_eq!(body["error"]["details"]["likes"], 3);
    }
}
