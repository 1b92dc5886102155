use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    tags::application::domain::entities::Tag,
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct TagDto {
    pub id: Uuid,
    #[schema(example = "aarti")]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            created_at: tag.created_at,
        }
    }
}

/// All tags, ordered by name
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "tags",
    responses(
        (status = 200, description = "Tags", body = inline(SuccessResponse<Vec<TagDto>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/tags")]
pub async fn list_tags_handler(data: web::Data<AppState>) -> impl Responder {
    match data.tags.list.execute().await {
        Ok(tags) => ApiResponse::success(tags.into_iter().map(TagDto::from).collect::<Vec<_>>()),
        Err(e) => {
            error!(error = %e, "Failed to list tags");
            ApiResponse::internal_error()
        }
    }
}
