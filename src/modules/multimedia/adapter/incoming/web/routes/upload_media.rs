use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use bytes::{Bytes, BytesMut};
use futures::TryStreamExt;
use serde_json::json;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminUser,
    multimedia::application::{
        domain::policies::ingest_policy::IngestPolicy,
        ports::incoming::use_cases::{IncomingFile, IngestMediaCommand},
    },
    shared::api::ApiResponse,
    AppState,
};

use super::{
    ingest_support::{
        map_command_error, map_ingest_error, submission_id_from, IngestResponse,
    },
    media_dto::{parse_date, parse_status, split_tags},
};

const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// Multipart layout of an upload submission. Every `files` part becomes
/// one media item sharing the text fields.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadMediaForm {
    #[schema(example = "Ganga Aarti")]
    title: String,
    description: Option<String>,
    /// YYYY-MM-DD, defaults to today
    date: Option<String>,
    location: Option<String>,
    /// Comma separated
    tags: Option<String>,
    /// `draft` or `published`
    status: Option<String>,
    is_featured: Option<bool>,
    #[schema(value_type = Vec<String>, format = Binary)]
    files: Vec<Vec<u8>>,
}

#[derive(Default)]
struct UploadForm {
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    location: Option<String>,
    tags: Option<String>,
    status: Option<String>,
    is_featured: bool,
    files: Vec<IncomingFile>,
}

/// Upload photos and videos
///
/// Files over the size ceiling reject the whole submission before anything
/// is uploaded.
#[utoipa::path(
    post,
    path = "/api/admin/media/upload",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("X-Submission-Id" = Option<String>, Header, format = Uuid, description = "Client chosen id for progress polling")),
    request_body(content = UploadMediaForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Submission stored", body = inline(SuccessResponse<IngestResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 409, description = "Submission id already in flight", body = ErrorResponse),
        (status = 413, description = "A file or the whole submission exceeds its ceiling", body = ErrorResponse),
        (status = 502, description = "Storage rejected a file", body = ErrorResponse),
        (status = 504, description = "Submission timed out", body = ErrorResponse),
    )
)]
#[post("/api/admin/media/upload")]
pub async fn upload_media_handler(
    admin: AdminUser,
    req: HttpRequest,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let submission_id = match submission_id_from(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let policy = data.multimedia.ingest.policy().clone();

    let form = match read_form(payload, &policy).await {
        Ok(form) => form,
        Err(resp) => return resp,
    };

    let status = match parse_status(form.status.as_deref()) {
        Ok(s) => s.unwrap_or_default(),
        Err(resp) => return resp,
    };
    let date = match parse_date(form.date.as_deref()) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let mut builder = IngestMediaCommand::builder()
        .title(form.title.unwrap_or_default())
        .description(form.description)
        .date(date)
        .location(form.location)
        .tags(split_tags(form.tags.as_deref()))
        .status(status)
        .featured(form.is_featured)
        .files(form.files);
    if let Some(id) = submission_id {
        builder = builder.submission_id(id);
    }

    let command = match builder.build(&policy) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    let file_count = command.file_count();
    match data.multimedia.ingest.execute(&admin.session, command).await {
        Ok(result) => {
            info!(
                submission_id = %result.submission_id,
                files = file_count,
                "Upload submission stored"
            );
            ApiResponse::created(IngestResponse::from(result))
        }
        Err(e) => map_ingest_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Multipart reading
// ──────────────────────────────────────────────────────────
//

/// Stops reading as soon as the submission passes `max_files` parts or
/// `max_submission_bytes` of file data.
async fn read_form(mut payload: Multipart, policy: &IngestPolicy) -> Result<UploadForm, HttpResponse> {
    let mut form = UploadForm::default();
    let mut remaining = policy.max_submission_bytes;

    while let Some(mut field) = payload.try_next().await.map_err(invalid_multipart)? {
        let Some(name) = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(str::to_string)
        else {
            continue;
        };

        if name == "files" || name == "file" {
            if form.files.len() >= policy.max_files {
                return Err(submission_too_large(policy));
            }
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string)
                .unwrap_or_default();
            let content_type = field
                .content_type()
                .map(|m| m.essence_str().to_string())
                .unwrap_or_default();

            let (bytes, total) =
                read_file_field(&mut field, policy.max_file_size_bytes, &mut remaining)
                    .await?
                    .ok_or_else(|| submission_too_large(policy))?;

            form.files.push(IncomingFile {
                file_name,
                content_type,
                declared_size: total,
                bytes,
            });
            continue;
        }

        let value = read_text_field(&mut field).await?;
        match name.as_str() {
            "title" => form.title = Some(value),
            "description" => form.description = Some(value),
            "date" => form.date = Some(value),
            "location" => form.location = Some(value),
            "tags" => form.tags = Some(value),
            "status" => form.status = Some(value),
            "is_featured" | "featured" => {
                form.is_featured = matches!(value.trim(), "true" | "1" | "on")
            }
            other => warn!(field = %other, "Ignoring unknown upload field"),
        }
    }

    Ok(form)
}

/// Reads the whole part, keeping the bytes only while they fit under
/// `max_bytes`. The returned total is the real size either way.
/// `Ok(None)` means the part ran past the submission budget and reading stopped.
async fn read_file_field(
    field: &mut Field,
    max_bytes: u64,
    remaining: &mut u64,
) -> Result<Option<(Bytes, u64)>, HttpResponse> {
    let mut buf = BytesMut::new();
    let mut total: u64 = 0;

    while let Some(chunk) = field.try_next().await.map_err(invalid_multipart)? {
        let len = chunk.len() as u64;
        if len > *remaining {
            return Ok(None);
        }
        *remaining -= len;
        total += len;
        if total <= max_bytes {
            buf.extend_from_slice(&chunk);
        } else if !buf.is_empty() {
            buf = BytesMut::new();
        }
    }

    Ok(Some((buf.freeze(), total)))
}

fn submission_too_large(policy: &IngestPolicy) -> HttpResponse {
    warn!(
        max_files = policy.max_files,
        max_submission_bytes = policy.max_submission_bytes,
        "Upload submission over its cap"
    );
    ApiResponse::error_with_details(
        actix_web::http::StatusCode::PAYLOAD_TOO_LARGE,
        "SUBMISSION_TOO_LARGE",
        "Submission exceeds the allowed number of files or total size",
        json!({
            "max_files": policy.max_files,
            "max_submission_bytes": policy.max_submission_bytes,
        }),
    )
}

async fn read_text_field(field: &mut Field) -> Result<String, HttpResponse> {
    let mut buf = BytesMut::new();

    while let Some(chunk) = field.try_next().await.map_err(invalid_multipart)? {
        if buf.len() + chunk.len() > MAX_TEXT_FIELD_BYTES {
            return Err(ApiResponse::payload_too_large(
                "FIELD_TOO_LARGE",
                "Text field too large",
            ));
        }
        buf.extend_from_slice(&chunk);
    }

    String::from_utf8(buf.to_vec())
        .map_err(|_| ApiResponse::bad_request("INVALID_MULTIPART", "Text fields must be UTF-8"))
}

fn invalid_multipart(err: MultipartError) -> HttpResponse {
    warn!(error = %err, "Malformed multipart upload");
    ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart body")
}
