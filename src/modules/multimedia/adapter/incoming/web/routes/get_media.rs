use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    multimedia::application::ports::incoming::use_cases::GetMediaError,
    shared::api::ApiResponse,
    AppState,
};

use super::media_dto::MediaItemDto;

/// Media detail
///
/// Counts a view on every successful read.
#[utoipa::path(
    get,
    path = "/api/media/{id}",
    tag = "media",
    params(("id" = Uuid, Path, description = "Media id")),
    responses(
        (status = 200, description = "Media item", body = inline(SuccessResponse<MediaItemDto>)),
        (status = 404, description = "Not found or not published", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/media/{id}")]
pub async fn get_media_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let media_id = path.into_inner();

    match data.multimedia.get.execute(media_id).await {
        Ok(view) => ApiResponse::success(MediaItemDto::from(view)),
        Err(GetMediaError::NotFound) => ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found"),
        Err(GetMediaError::QueryFailed(e)) => {
            error!(error = %e, media_id = %media_id, "Failed to load media");
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

    use crate::multimedia::application::{
        domain::embed_source::ThumbnailQuality,
        ports::incoming::use_cases::{GetMediaUseCase, MediaView},
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::media_fixtures::sample_youtube_video;

    #[derive(Clone)]
    struct MockGetMedia(Result<MediaView, GetMediaError>);

    #[async_trait]
    impl GetMediaUseCase for MockGetMedia {
        async fn execute(&self, _media_id: Uuid) -> Result<MediaView, GetMediaError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_media_returns_embed_player() {
        let id = Uuid::new_v4();
        let view = MediaView::new(sample_youtube_video(id), ThumbnailQuality::MaxRes);
        let app_state = TestAppStateBuilder::default()
            .with_get_media(MockGetMedia(Ok(view)))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_media_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/media/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
        assert!(body["data"]["display"]["embed_url"]
            .as_str()
            .unwrap()
            .starts_with("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    }

    #[actix_web::test]
    async fn test_get_media_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_media(MockGetMedia(Err(GetMediaError::NotFound)))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_media_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/media/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MEDIA_NOT_FOUND");
    }
}
