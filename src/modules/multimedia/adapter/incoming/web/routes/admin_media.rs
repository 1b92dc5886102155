use actix_web::{delete, get, patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    multimedia::application::{
        domain::embed_source::ThumbnailQuality,
        ports::{
            incoming::use_cases::{
                AdminListMediaQuery, DeleteMediaError, MediaView, UpdateMediaCommand,
                UpdateMediaCommandError, UpdateMediaError,
            },
            outgoing::db::MediaUpdate,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

use super::media_dto::{parse_status, MediaItemDto, MediaListResponse};

//
// ──────────────────────────────────────────────────────────
// List
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminListMediaParams {
    /// `draft` or `published`; omitted means both
    pub status: Option<String>,
    pub search: Option<String>,
    /// Defaults to 100
    pub limit: Option<u64>,
}

/// Admin media console listing (drafts included)
#[utoipa::path(
    get,
    path = "/api/admin/media",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(AdminListMediaParams),
    responses(
        (status = 200, description = "All items", body = inline(SuccessResponse<MediaListResponse>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/media")]
pub async fn admin_list_media_handler(
    _admin: AdminUser,
    params: web::Query<AdminListMediaParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    let status = match parse_status(params.status.as_deref()) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let query = AdminListMediaQuery {
        status,
        search: params.search,
        limit: params.limit,
    };

    match data.multimedia.admin_list.execute(query).await {
        Ok(views) => ApiResponse::success(MediaListResponse::from_views(views)),
        Err(e) => {
            error!(error = %e, "Failed to list media for admin");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMediaRequest {
    #[schema(example = "Ganga Aarti at dusk")]
    pub title: Option<String>,
    /// Empty string clears it
    pub description: Option<String>,
    /// Empty string clears it
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    #[schema(example = "published")]
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
}

/// Edit a media item
#[utoipa::path(
    patch,
    path = "/api/admin/media/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Media id")),
    request_body = UpdateMediaRequest,
    responses(
        (status = 200, description = "Updated item", body = inline(SuccessResponse<MediaItemDto>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    )
)]
#[patch("/api/admin/media/{id}")]
pub async fn update_media_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateMediaRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let media_id = path.into_inner();
    let req = req.into_inner();

    let status = match parse_status(req.status.as_deref()) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let command = match UpdateMediaCommand::new(
        media_id,
        MediaUpdate {
            title: req.title,
            description: req.description,
            location: req.location,
            tags: req.tags,
            status,
            is_featured: req.is_featured,
            views: req.views,
            likes: req.likes,
        },
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_update_command_error(e),
    };

    match data.multimedia.update.execute(command).await {
        Ok(item) => {
            info!(media_id = %media_id, "Media updated");
            ApiResponse::success(MediaItemDto::from(MediaView::new(
                item,
                ThumbnailQuality::High,
            )))
        }
        Err(UpdateMediaError::NotFound) => {
            ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found")
        }
        Err(UpdateMediaError::RepositoryError(e)) => {
            error!(error = %e, media_id = %media_id, "Failed to update media");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Delete
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, ToSchema)]
pub struct DeleteMediaResponse {
    pub media_id: Uuid,
    /// Storage object that could not be released, if any
    pub orphaned_key: Option<String>,
}

/// Delete a media item and release its stored object
#[utoipa::path(
    delete,
    path = "/api/admin/media/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Media id")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<DeleteMediaResponse>)),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/media/{id}")]
pub async fn delete_media_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let media_id = path.into_inner();

    match data.multimedia.delete.execute(&admin.session, media_id).await {
        Ok(outcome) => {
            if let Some(key) = &outcome.orphaned_key {
                warn!(media_id = %media_id, orphaned_key = %key, "Media deleted with orphaned object");
            }
            ApiResponse::success(DeleteMediaResponse {
                media_id: outcome.media_id,
                orphaned_key: outcome.orphaned_key,
            })
        }
        Err(e) => map_delete_media_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_update_command_error(err: UpdateMediaCommandError) -> HttpResponse {
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}

fn map_delete_media_error(err: DeleteMediaError) -> HttpResponse {
    match err {
        DeleteMediaError::AuthRequired => {
            ApiResponse::unauthorized("SESSION_REQUIRED", "Please sign in again")
        }
        DeleteMediaError::NotFound => ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found"),
        DeleteMediaError::RepositoryError(e) => {
            error!(error = %e, "Failed to delete media");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
