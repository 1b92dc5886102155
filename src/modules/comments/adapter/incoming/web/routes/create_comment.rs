use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    comments::application::ports::incoming::use_cases::{
        CreateCommentCommand, CreateCommentError,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::list_comments::CommentDto;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[schema(example = "Jai Siya Ram")]
    pub text: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Comment on a media item
#[utoipa::path(
    post,
    path = "/api/media/{id}/comments",
    tag = "comments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Media id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = inline(SuccessResponse<CommentDto>)),
        (status = 400, description = "Empty or oversized text", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
    )
)]
#[post("/api/media/{id}/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateCommentCommand::new(path.into_inner(), &req.text) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.comments.create.execute(&user.session, command).await {
        Ok(comment) => ApiResponse::created(CommentDto::from(comment)),
        Err(err) => map_create_comment_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_comment_error(err: CreateCommentError) -> HttpResponse {
    match err {
        CreateCommentError::MediaNotFound => {
            ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found")
        }
        CreateCommentError::RepositoryError(e) => {
            error!(error = %e, "Failed to create comment");
            ApiResponse::internal_error()
        }
    }
}
