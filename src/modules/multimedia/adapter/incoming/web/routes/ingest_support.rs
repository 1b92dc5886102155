use actix_web::{http::StatusCode, HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::multimedia::application::{
    domain::embed_source::ThumbnailQuality,
    ports::incoming::use_cases::{IngestCommandError, IngestMediaError, IngestResult, MediaView},
};
use crate::shared::api::ApiResponse;

use super::media_dto::MediaItemDto;

/// Lets a client poll progress for a submission it is still sending.
pub const SUBMISSION_ID_HEADER: &str = "X-Submission-Id";

#[derive(Serialize, ToSchema)]
pub struct IngestResponse {
    pub submission_id: Uuid,
    pub items: Vec<MediaItemDto>,
    pub count: usize,
}

impl From<IngestResult> for IngestResponse {
    fn from(result: IngestResult) -> Self {
        let items: Vec<MediaItemDto> = result
            .items
            .into_iter()
            .map(|item| MediaItemDto::from(MediaView::new(item, ThumbnailQuality::High)))
            .collect();
        Self {
            submission_id: result.submission_id,
            count: items.len(),
            items,
        }
    }
}

/// Missing header means the server picks an id.
pub fn submission_id_from(req: &HttpRequest) -> Result<Option<Uuid>, HttpResponse> {
    match req.headers().get(SUBMISSION_ID_HEADER) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .map(Some)
            .ok_or_else(|| {
                ApiResponse::bad_request(
                    "INVALID_SUBMISSION_ID",
                    "X-Submission-Id must be a UUID",
                )
            }),
    }
}

pub fn map_command_error(err: IngestCommandError) -> HttpResponse {
    match err {
        IngestCommandError::FileTooLarge {
            ref file_name,
            max_bytes,
            actual_bytes,
        } => ApiResponse::error_with_details(
            StatusCode::PAYLOAD_TOO_LARGE,
            "FILE_TOO_LARGE",
            &err.to_string(),
            json!({
                "file_name": file_name,
                "max_bytes": max_bytes,
                "actual_bytes": actual_bytes,
            }),
        ),
        other => ApiResponse::bad_request("VALIDATION_ERROR", &other.to_string()),
    }
}

pub fn map_ingest_error(err: IngestMediaError) -> HttpResponse {
    match err {
        IngestMediaError::AuthRequired => {
            ApiResponse::unauthorized("SESSION_REQUIRED", "Please sign in again")
        }
        IngestMediaError::UploadFailed {
            ref file_name,
            ref orphaned_keys,
            ..
        } => {
            warn!(file_name = %file_name, orphaned = ?orphaned_keys, "Submission upload failed");
            ApiResponse::error_with_details(
                StatusCode::BAD_GATEWAY,
                "UPLOAD_FAILED",
                &err.to_string(),
                json!({ "file_name": file_name, "orphaned_keys": orphaned_keys }),
            )
        }
        IngestMediaError::Timeout {
            after,
            ref orphaned_keys,
        } => {
            warn!(after_secs = after.as_secs(), orphaned = ?orphaned_keys, "Submission timed out");
            ApiResponse::error_with_details(
                StatusCode::GATEWAY_TIMEOUT,
                "SUBMISSION_TIMEOUT",
                "Upload timed out. Please try again.",
                json!({ "orphaned_keys": orphaned_keys }),
            )
        }
        IngestMediaError::PartialBatch {
            ref orphaned_keys,
            ref reason,
        } => {
            error!(reason = %reason, orphaned = ?orphaned_keys, "Uploaded objects were not recorded");
            ApiResponse::error_with_details(
                StatusCode::INTERNAL_SERVER_ERROR,
                "PARTIAL_BATCH",
                "Files were uploaded but could not be saved",
                json!({ "orphaned_keys": orphaned_keys }),
            )
        }
        IngestMediaError::SubmissionInFlight(id) => ApiResponse::error_with_details(
            StatusCode::CONFLICT,
            "SUBMISSION_IN_FLIGHT",
            "A submission with this id is still running",
            json!({ "submission_id": id }),
        ),
        IngestMediaError::RepositoryError(e) => {
            error!(error = %e, "Failed to save submission");
            ApiResponse::internal_error()
        }
    }
}
