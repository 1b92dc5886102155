use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    multimedia::application::ports::incoming::use_cases::SubmissionProgressError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct SubmissionProgressResponse {
    pub submission_id: Uuid,
    /// 0..=100; 100 only once the batch is stored
    #[schema(example = 48)]
    pub percent: u8,
}

/// Poll progress of an in-flight submission
#[utoipa::path(
    get,
    path = "/api/admin/media/submissions/{id}/progress",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Current progress", body = inline(SuccessResponse<SubmissionProgressResponse>)),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 404, description = "Not in flight", body = ErrorResponse),
    )
)]
#[get("/api/admin/media/submissions/{id}/progress")]
pub async fn submission_progress_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.multimedia.submission_progress.execute(path.into_inner()) {
        Ok(progress) => ApiResponse::success(SubmissionProgressResponse {
            submission_id: progress.submission_id,
            percent: progress.percent,
        }),
        Err(SubmissionProgressError::NotInFlight) => ApiResponse::not_found(
            "SUBMISSION_NOT_FOUND",
            "Submission is finished or unknown",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::multimedia::application::{
        domain::progress::ProgressTracker, submission_registry::SubmissionRegistry,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::admin_token_verifier;

    #[actix_web::test]
    async fn test_progress_of_live_submission() {
        let registry = SubmissionRegistry::new();
        let tracker = ProgressTracker::new(2);
        let id = Uuid::new_v4();
        let _guard = registry.register(id, tracker.subscribe()).unwrap();
        tracker.slot(0).unwrap().report(100, 100);

        let app_state = TestAppStateBuilder::default()
            .with_submission_progress(registry)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_verifier())
                .service(submission_progress_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/media/submissions/{id}/progress"))
            .insert_header(("Authorization", "Bearer test-access-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["percent"], 48);
    }

    #[actix_web::test]
    async fn test_unknown_submission_is_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_submission_progress(SubmissionRegistry::new())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_verifier())
                .service(submission_progress_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/media/submissions/{}/progress", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-access-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
