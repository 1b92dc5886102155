use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    multimedia::application::ports::incoming::use_cases::ListMediaQuery,
    shared::api::ApiResponse,
    AppState,
};

use super::media_dto::{parse_media_type_filter, split_tags, MediaListResponse};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMediaParams {
    /// `photo`, `video` or `all`
    #[serde(rename = "type")]
    #[param(rename = "type", example = "photo")]
    pub media_type: Option<String>,

    /// Comma separated; items must carry every tag
    #[param(example = "aarti,ganga")]
    pub tags: Option<String>,

    /// Featured strip only (defaults the limit to 10)
    pub featured: Option<bool>,

    /// Case-insensitive match on title, description, location, photographer
    pub search: Option<String>,

    /// 1..=100
    pub limit: Option<u64>,
}

/// Public gallery
///
/// Published items, newest first.
#[utoipa::path(
    get,
    path = "/api/media",
    tag = "media",
    params(ListMediaParams),
    responses(
        (status = 200, description = "Gallery items", body = inline(SuccessResponse<MediaListResponse>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/media")]
pub async fn list_media_handler(
    params: web::Query<ListMediaParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    let media_type = match parse_media_type_filter(params.media_type.as_deref()) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    let query = ListMediaQuery {
        media_type,
        tags: split_tags(params.tags.as_deref()),
        featured: params.featured,
        search: params.search,
        limit: params.limit,
    };

    match data.multimedia.list.execute(query).await {
        Ok(views) => ApiResponse::success(MediaListResponse::from_views(views)),
        Err(e) => {
            error!(error = %e, "Failed to list media");
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
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::multimedia::application::{
        domain::{embed_source::ThumbnailQuality, entities::MediaType},
        ports::incoming::use_cases::{ListMediaError, ListMediaUseCase, MediaView},
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::media_fixtures::{sample_photo, sample_youtube_video};

    #[derive(Clone)]
    struct MockListMediaUseCase {
        result: Result<Vec<MediaView>, ListMediaError>,
        captured: Arc<Mutex<Option<ListMediaQuery>>>,
    }

    impl MockListMediaUseCase {
        fn ok(views: Vec<MediaView>) -> Self {
            Self {
                result: Ok(views),
                captured: Arc::new(Mutex::new(None)),
            }
        }

        fn err(err: ListMediaError) -> Self {
            Self {
                result: Err(err),
                captured: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl ListMediaUseCase for MockListMediaUseCase {
        async fn execute(&self, query: ListMediaQuery) -> Result<Vec<MediaView>, ListMediaError> {
            *self.captured.lock().unwrap() = Some(query);
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_list_media_success() {
        let uc = MockListMediaUseCase::ok(vec![
            MediaView::new(sample_photo(Uuid::new_v4()), ThumbnailQuality::High),
            MediaView::new(sample_youtube_video(Uuid::new_v4()), ThumbnailQuality::High),
        ]);
        let app_state = TestAppStateBuilder::default()
            .with_list_media(uc.clone())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_media_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/media?type=video&tags=aarti,%20ganga&search=Ganga&limit=20")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["count"], 2);
        assert_eq!(body["data"]["items"][0]["display"]["render"], "image");
        assert_eq!(body["data"]["items"][1]["display"]["render"], "embed");

        let query = uc.captured.lock().unwrap().clone().unwrap();
        assert_eq!(query.media_type, Some(MediaType::Video));
        assert_eq!(query.tags, vec!["aarti", "ganga"]);
        assert_eq!(query.search.as_deref(), Some("Ganga"));
        assert_eq!(query.limit, Some(20));
    }

    #[actix_web::test]
    async fn test_list_media_type_all_means_no_filter() {
        let uc = MockListMediaUseCase::ok(vec![]);
        let app_state = TestAppStateBuilder::default()
            .with_list_media(uc.clone())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_media_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/media?type=all&featured=true")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let query = uc.captured.lock().unwrap().clone().unwrap();
        assert_eq!(query.media_type, None);
        assert!(query.is_featured_strip());
    }

    #[actix_web::test]
    async fn test_list_media_invalid_type_returns_bad_request() {
        let app_state = TestAppStateBuilder::default()
            .with_list_media(MockListMediaUseCase::ok(vec![]))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_media_handler)).await;

        let req = test::TestRequest::get().uri("/api/media?type=audio").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_MEDIA_TYPE");
    }

    #[actix_web::test]
    async fn test_list_media_query_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_list_media(MockListMediaUseCase::err(ListMediaError::QueryFailed(
                "db down".into(),
            )))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_media_handler)).await;

        let req = test::TestRequest::get().uri("/api/media").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
