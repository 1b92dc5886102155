use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct MediaStatsResponse {
    #[schema(example = 120)]
    pub total_photos: u64,
    #[schema(example = 18)]
    pub total_videos: u64,
    #[schema(example = 5400)]
    pub total_views: i64,
}

/// Gallery statistics (published items only)
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "media",
    responses(
        (status = 200, description = "Counts", body = inline(SuccessResponse<MediaStatsResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/stats")]
pub async fn media_stats_handler(data: web::Data<AppState>) -> impl Responder {
    match data.multimedia.stats.execute().await {
        Ok(stats) => ApiResponse::success(MediaStatsResponse {
            total_photos: stats.total_photos,
            total_videos: stats.total_videos,
            total_views: stats.total_views,
        }),
        Err(e) => {
            error!(error = %e, "Failed to compute stats");
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

    use crate::multimedia::application::ports::{
        incoming::use_cases::{MediaStatsError, MediaStatsUseCase},
        outgoing::db::MediaStats,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockStats(Result<MediaStats, MediaStatsError>);

    #[async_trait]
    impl MediaStatsUseCase for MockStats {
        async fn execute(&self) -> Result<MediaStats, MediaStatsError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn test_stats_success() {
        let app_state = TestAppStateBuilder::default()
            .with_media_stats(MockStats(Ok(MediaStats {
                total_photos: 12,
                total_videos: 3,
                total_views: 77,
            })))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(media_stats_handler)).await;

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total_photos"], 12);
        assert_eq!(body["data"]["total_videos"], 3);
        assert_eq!(body["data"]["total_views"], 77);
    }

    #[actix_web::test]
    async fn test_stats_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_media_stats(MockStats(Err(MediaStatsError::QueryFailed("x".into()))))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(media_stats_handler)).await;

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
