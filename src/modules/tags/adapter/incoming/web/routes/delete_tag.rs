use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::AdminUser,
    shared::api::ApiResponse,
    tags::application::ports::incoming::use_cases::DeleteTagError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Delete a tag
#[utoipa::path(
    delete,
    path = "/api/admin/tags/{id}",
    tag = "tags",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Tag id")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Tag not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/tags/{id}")]
pub async fn delete_tag_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tags.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_tag_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_tag_error(err: DeleteTagError) -> HttpResponse {
    match err {
        DeleteTagError::TagNotFound => ApiResponse::not_found("TAG_NOT_FOUND", "Tag not found"),
        DeleteTagError::DatabaseError(e) => {
            error!(error = %e, "Failed to delete tag");
            ApiResponse::internal_error()
        }
    }
}
