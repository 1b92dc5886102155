use actix_web::{post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    multimedia::application::ports::incoming::use_cases::IngestMediaCommand,
    shared::api::ApiResponse,
    AppState,
};

use super::{
    ingest_support::{map_command_error, map_ingest_error, submission_id_from, IngestResponse},
    media_dto::{parse_date, parse_media_type, parse_status},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitLinkRequest {
    #[schema(example = "Kirtan at the temple")]
    pub title: String,
    #[schema(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub url: String,
    /// `photo` or `video`; ignored for YouTube links, which are always videos
    #[serde(rename = "type")]
    #[schema(rename = "type", example = "video")]
    pub media_type: String,
    pub description: Option<String>,
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `draft` or `published`
    pub status: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Add a media item from an external URL
#[utoipa::path(
    post,
    path = "/api/admin/media/link",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("X-Submission-Id" = Option<String>, Header, format = Uuid, description = "Client chosen id for progress polling")),
    request_body = SubmitLinkRequest,
    responses(
        (status = 201, description = "Link stored", body = inline(SuccessResponse<IngestResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 409, description = "Submission id already in flight", body = ErrorResponse),
        (status = 504, description = "Submission timed out", body = ErrorResponse),
    )
)]
#[post("/api/admin/media/link")]
pub async fn submit_link_handler(
    admin: AdminUser,
    http_req: HttpRequest,
    req: web::Json<SubmitLinkRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let submission_id = match submission_id_from(&http_req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let req = req.into_inner();

    let media_type = match parse_media_type(&req.media_type) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let status = match parse_status(req.status.as_deref()) {
        Ok(s) => s.unwrap_or_default(),
        Err(resp) => return resp,
    };
    let date = match parse_date(req.date.as_deref()) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let mut builder = IngestMediaCommand::builder()
        .title(req.title)
        .description(req.description)
        .date(date)
        .location(req.location)
        .tags(req.tags)
        .status(status)
        .featured(req.is_featured)
        .link(req.url, media_type);
    if let Some(id) = submission_id {
        builder = builder.submission_id(id);
    }

    let policy = data.multimedia.ingest.policy().clone();
    let command = match builder.build(&policy) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.multimedia.ingest.execute(&admin.session, command).await {
        Ok(result) => {
            info!(submission_id = %result.submission_id, "Link submission stored");
            ApiResponse::created(IngestResponse::from(result))
        }
        Err(e) => map_ingest_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::Session;
    use crate::multimedia::application::{
        domain::{entities::MediaType, policies::ingest_policy::IngestPolicy},
        ports::incoming::use_cases::{
            IngestMediaError, IngestMediaUseCase, IngestResult, IngestSource,
        },
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::media_fixtures::sample_youtube_video;
    use crate::tests::support::stubs::{admin_token_verifier, StubTokenVerifier};

    #[derive(Clone)]
    struct MockIngest {
        policy: IngestPolicy,
        captured: Arc<Mutex<Option<IngestMediaCommand>>>,
    }

    impl MockIngest {
        fn new() -> Self {
            Self {
                policy: IngestPolicy::default(),
                captured: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl IngestMediaUseCase for MockIngest {
        async fn execute(
            &self,
            _session: &Session,
            command: IngestMediaCommand,
        ) -> Result<IngestResult, IngestMediaError> {
            let submission_id = command.submission_id();
            *self.captured.lock().unwrap() = Some(command);
            Ok(IngestResult {
                submission_id,
                items: vec![sample_youtube_video(Uuid::new_v4())],
            })
        }

        fn policy(&self) -> &IngestPolicy {
            &self.policy
        }
    }

    #[actix_web::test]
    async fn test_submit_link_success() {
        let uc = MockIngest::new();
        let app_state = TestAppStateBuilder::default()
            .with_ingest_media(uc.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_verifier())
                .service(submit_link_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/media/link")
            .insert_header(("Authorization", "Bearer test-access-token"))
            .set_json(json!({
                "title": "Kirtan",
                "url": " https://youtu.be/dQw4w9WgXcQ ",
                "type": "photo",
                "tags": ["Kirtan", "kirtan"],
                "date": "2024-03-25"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["items"][0]["display"]["render"], "embed");

        let command = uc.captured.lock().unwrap().clone().unwrap();
        match command.source() {
            IngestSource::Link { url, selected_type } => {
                assert_eq!(url, "https://youtu.be/dQw4w9WgXcQ");
                assert_eq!(*selected_type, MediaType::Photo);
            }
            other => panic!("Expected link, got {:?}", other),
        }
        assert_eq!(command.metadata().date.to_string(), "2024-03-25");
    }

    #[actix_web::test]
    async fn test_submit_link_empty_url_is_rejected() {
        let uc = MockIngest::new();
        let app_state = TestAppStateBuilder::default()
            .with_ingest_media(uc.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(admin_token_verifier())
                .service(submit_link_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/media/link")
            .insert_header(("Authorization", "Bearer test-access-token"))
            .set_json(json!({ "title": "Kirtan", "url": "   ", "type": "video" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(uc.captured.lock().unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_submit_link_requires_admin() {
        let app_state = TestAppStateBuilder::default()
            .with_ingest_media(MockIngest::new())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(StubTokenVerifier::member().into_data())
                .service(submit_link_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/media/link")
            .insert_header(("Authorization", "Bearer test-access-token"))
            .set_json(json!({ "title": "Kirtan", "url": "https://example.com/a.jpg", "type": "photo" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
