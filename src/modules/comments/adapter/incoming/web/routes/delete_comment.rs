use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    comments::application::ports::incoming::use_cases::DeleteCommentError,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Delete your own comment
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = "comments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Comment belongs to someone else", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
    )
)]
#[delete("/api/comments/{id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .comments
        .delete
        .execute(&user.session, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_comment_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_comment_error(err: DeleteCommentError) -> HttpResponse {
    match err {
        DeleteCommentError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        DeleteCommentError::NotOwner => ApiResponse::forbidden(
            "COMMENT_FORBIDDEN",
            "Only the author can delete this comment",
        ),
        DeleteCommentError::DatabaseError(e) => {
            error!(error = %e, "Failed to delete comment");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::auth::application::domain::entities::Session;
    use crate::comments::application::ports::incoming::use_cases::DeleteCommentUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenVerifier;

    #[derive(Clone)]
    struct MockDeleteComment(Result<(), DeleteCommentError>);

    #[async_trait]
    impl DeleteCommentUseCase for MockDeleteComment {
        async fn execute(
            &self,
            _session: &Session,
            _comment_id: Uuid,
        ) -> Result<(), DeleteCommentError> {
            self.0.clone()
        }
    }

    async fn call(uc: MockDeleteComment) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_delete_comment(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(StubTokenVerifier::member().into_data())
                .service(delete_comment_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/comments/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-access-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[actix_web::test]
    async fn test_owner_deletes_comment() {
        let (status, _) = call(MockDeleteComment(Ok(()))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_other_user_is_forbidden() {
        let (status, body) = call(MockDeleteComment(Err(DeleteCommentError::NotOwner))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "COMMENT_FORBIDDEN");
    }

    #[actix_web::test]
    async fn test_missing_comment() {
        let (status, body) = call(MockDeleteComment(Err(DeleteCommentError::CommentNotFound))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "COMMENT_NOT_FOUND");
    }
}
