use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    shared::api::ApiResponse,
    tags::application::ports::incoming::use_cases::{CreateTagCommand, CreateTagError},
    AppState,
};

use super::list_tags::TagDto;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    #[schema(example = "aarti")]
    pub name: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a tag
#[utoipa::path(
    post,
    path = "/api/admin/tags",
    tag = "tags",
    security(("bearer_auth" = [])),
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created", body = inline(SuccessResponse<TagDto>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 409, description = "Tag already exists", body = ErrorResponse),
    )
)]
#[post("/api/admin/tags")]
pub async fn create_tag_handler(
    _admin: AdminUser,
    req: web::Json<CreateTagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateTagCommand::new(&req.name) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.tags.create.execute(command).await {
        Ok(tag) => ApiResponse::created(TagDto::from(tag)),
        Err(err) => map_create_tag_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_tag_error(err: CreateTagError) -> HttpResponse {
    match err {
        CreateTagError::TagAlreadyExists => {
            ApiResponse::conflict("TAG_ALREADY_EXISTS", "Tag already exists")
        }
        CreateTagError::RepositoryError(e) => {
            error!(error = %e, "Failed to create tag");
            ApiResponse::internal_error()
        }
    }
}
