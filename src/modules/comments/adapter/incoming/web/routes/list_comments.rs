use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    comments::application::domain::entities::Comment,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentDto {
    pub id: Uuid,
    pub media_id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "devotee")]
    pub username: String,
    #[schema(example = "Jai Siya Ram")]
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            media_id: comment.media_id,
            user_id: comment.user_id,
            username: comment.author_name,
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}

/// List comments on a media item, newest first
#[utoipa::path(
    get,
    path = "/api/media/{id}/comments",
    tag = "comments",
    params(("id" = Uuid, Path, description = "Media id")),
    responses(
        (status = 200, description = "Comments", body = inline(SuccessResponse<Vec<CommentDto>>)),
        (status = 500, description = "Internal error", body = ErrorResponse),
    )
)]
#[get("/api/media/{id}/comments")]
pub async fn list_comments_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.comments.list.execute(path.into_inner()).await {
        Ok(comments) => ApiResponse::success(
            comments
                .into_iter()
                .map(CommentDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Failed to list comments");
            ApiResponse::internal_error()
        }
    }
}
