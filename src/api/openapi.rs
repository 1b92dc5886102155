use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    SessionResponse, SignInRequestDto, SignInResponse, SignInUserInfo, SignOutResponse,
    SignUpRequestDto, SignUpResponse,
};

// Comments
use crate::comments::adapter::incoming::web::routes::{CommentDto, CreateCommentRequest};

// Media
use crate::multimedia::adapter::incoming::web::routes::{
    DeleteMediaResponse, DisplayDto, IngestResponse, LikeResponse, MediaItemDto,
    MediaListResponse, MediaStatsResponse, SubmissionProgressResponse, SubmitLinkRequest,
    UpdateMediaRequest, UploadMediaForm,
};

// Tags
use crate::tags::adapter::incoming::web::routes::{CreateTagRequest, TagDto};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Devotional Gallery API",
        version = "1.0.0",
        description = "Photos and videos of the gallery: public browsing, likes and the admin ingestion pipeline",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::sign_up_handler,
        crate::auth::adapter::incoming::web::routes::sign_in_handler,
        crate::auth::adapter::incoming::web::routes::sign_out_handler,
        crate::auth::adapter::incoming::web::routes::current_session_handler,

        // Public media endpoints
        crate::multimedia::adapter::incoming::web::routes::list_media_handler,
        crate::multimedia::adapter::incoming::web::routes::get_media_handler,
        crate::multimedia::adapter::incoming::web::routes::like_media_handler,
        crate::multimedia::adapter::incoming::web::routes::media_stats_handler,

        // Comment endpoints
        crate::comments::adapter::incoming::web::routes::list_comments_handler,
        crate::comments::adapter::incoming::web::routes::create_comment_handler,
        crate::comments::adapter::incoming::web::routes::delete_comment_handler,

        // Admin media endpoints
        crate::multimedia::adapter::incoming::web::routes::upload_media_handler,
        crate::multimedia::adapter::incoming::web::routes::submit_link_handler,
        crate::multimedia::adapter::incoming::web::routes::submission_progress_handler,
        crate::multimedia::adapter::incoming::web::routes::admin_list_media_handler,
        crate::multimedia::adapter::incoming::web::routes::update_media_handler,
        crate::multimedia::adapter::incoming::web::routes::delete_media_handler,

        // Tag endpoints
        crate::tags::adapter::incoming::web::routes::list_tags_handler,
        crate::tags::adapter::incoming::web::routes::create_tag_handler,
        crate::tags::adapter::incoming::web::routes::delete_tag_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<MediaListResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            SignUpRequestDto,
            SignUpResponse,
            SignInRequestDto,
            SignInResponse,
            SignInUserInfo,
            SignOutResponse,
            SessionResponse,

            // Media DTOs
            DisplayDto,
            MediaItemDto,
            MediaListResponse,
            LikeResponse,
            MediaStatsResponse,
            UploadMediaForm,
            SubmitLinkRequest,
            IngestResponse,
            SubmissionProgressResponse,
            UpdateMediaRequest,
            DeleteMediaResponse,

            // Comment DTOs
            CommentDto,
            CreateCommentRequest,

            // Tag DTOs
            TagDto,
            CreateTagRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Sign-up, sign-in and session endpoints"),
        (name = "media", description = "Public gallery endpoints"),
        (name = "admin", description = "Media ingestion and curation, admin only"),
        (name = "tags", description = "Tag vocabulary endpoints"),
        (name = "comments", description = "Comments on media items"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token returned by sign-in"))
                        .build(),
                ),
            )
        }
    }
}
