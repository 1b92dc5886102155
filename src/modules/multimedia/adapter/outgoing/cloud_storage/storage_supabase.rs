use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::domain::entities::Session;
use crate::multimedia::application::domain::progress::ProgressSlot;
use crate::multimedia::application::ports::outgoing::cloud_storage::{
    ObjectStorage, StorageError, StoredObject, UploadObject,
};
use crate::shared::supabase_config::SupabaseConfig;

/// Upload bodies are streamed in chunks of this size; progress is reported per chunk.
const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

type BodyStream = BoxStream<'static, Result<Bytes, std::io::Error>>;

fn split_chunks(bytes: &Bytes, chunk_size: usize) -> Vec<Bytes> {
    (0..bytes.len())
        .step_by(chunk_size)
        .map(|start| bytes.slice(start..(start + chunk_size).min(bytes.len())))
        .collect()
}

/// Body stream that reports the bytes handed to the transport so far.
fn progress_body(bytes: Bytes, progress: ProgressSlot) -> BodyStream {
    let total = bytes.len() as u64;
    progress.report(0, total);

    let mut sent = 0u64;
    stream::iter(split_chunks(&bytes, UPLOAD_CHUNK_BYTES))
        .map(move |chunk| {
            sent += chunk.len() as u64;
            progress.report(sent, total);
            Ok(chunk)
        })
        .boxed()
}

fn map_status(status: u16, body: &str, key: &str) -> StorageError {
    let b = body.to_lowercase();

    match status {
        401 | 403 => StorageError::AccessDenied,
        404 => StorageError::NotFound(key.to_string()),
        409 => StorageError::AlreadyExists(key.to_string()),
        413 => StorageError::PayloadTooLarge,
        // The storage API wraps some errors in a 400 with the real code in the body.
        400 if b.contains("duplicate") || b.contains("already exists") => {
            StorageError::AlreadyExists(key.to_string())
        }
        400 if b.contains("not_found") || b.contains("not found") => {
            StorageError::NotFound(key.to_string())
        }
        400 if b.contains("payload too large") || b.contains("maximum allowed size") => {
            StorageError::PayloadTooLarge
        }
        _ => StorageError::Transport(format!("HTTP {}: {}", status, body.trim())),
    }
}

struct TransportRequest {
    method: Method,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<BodyStream>,
}

struct TransportResponse {
    status: u16,
    body: String,
}

/// Internal seam so the adapter can be tested without a live storage endpoint.
#[async_trait]
trait StorageTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, String>;
}

/// Object storage backed by the hosted storage REST API.
#[derive(Clone)]
pub struct SupabaseObjectStorage {
    config: SupabaseConfig,
    bucket: String,
    transport: Arc<dyn StorageTransport>,
}

impl SupabaseObjectStorage {
    pub fn new(config: SupabaseConfig, bucket: impl Into<String>) -> Self {
        Self {
            config,
            bucket: bucket.into(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    #[cfg(test)]
    fn with_transport(
        config: SupabaseConfig,
        bucket: &str,
        transport: Arc<dyn StorageTransport>,
    ) -> Self {
        Self {
            config,
            bucket: bucket.to_string(),
            transport,
        }
    }

    fn object_url(&self, key: &str) -> String {
        self.config
            .endpoint(&format!("storage/v1/object/{}/{}", self.bucket, key))
    }

    fn auth_headers(&self, session: &Session) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", format!("Bearer {}", session.access_token)),
            ("apikey", self.config.anon_key.clone()),
        ]
    }
}

#[async_trait]
impl ObjectStorage for SupabaseObjectStorage {
    async fn upload(
        &self,
        session: &Session,
        object: UploadObject,
        progress: &ProgressSlot,
    ) -> Result<StoredObject, StorageError> {
        let content_type = if object.content_type.trim().is_empty() {
            FALLBACK_CONTENT_TYPE.to_string()
        } else {
            object.content_type.clone()
        };

        let size = object.size();
        let mut headers = self.auth_headers(session);
        headers.push(("Content-Type", content_type));
        headers.push(("Content-Length", size.to_string()));
        // Keys are unique per upload; never overwrite.
        headers.push(("x-upsert", "false".to_string()));

        let UploadObject { key, bytes, .. } = object;
        let request = TransportRequest {
            method: Method::POST,
            url: self.object_url(&key),
            headers,
            body: Some(progress_body(bytes, progress.clone())),
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(StorageError::Transport)?;

        if !(200..300).contains(&response.status) {
            tracing::warn!("Upload of {} rejected with status {}", key, response.status);
            return Err(map_status(response.status, &response.body, &key));
        }

        tracing::debug!("Uploaded {} ({} bytes)", key, size);
        Ok(StoredObject {
            public_url: self.public_url(&key),
            key,
        })
    }

    fn public_url(&self, key: &str) -> String {
        self.config
            .endpoint(&format!("storage/v1/object/public/{}/{}", self.bucket, key))
    }

    async fn delete(&self, session: &Session, key: &str) -> Result<(), StorageError> {
        let request = TransportRequest {
            method: Method::DELETE,
            url: self.object_url(key),
            headers: self.auth_headers(session),
            body: None,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(StorageError::Transport)?;

        if (200..300).contains(&response.status) {
            Ok(())
        } else {
            Err(map_status(response.status, &response.body, key))
        }
    }
}

// ============================================================================
// Real transport (reqwest)
// ============================================================================

struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build storage HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }
}

#[async_trait]
impl StorageTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, String> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(reqwest::Body::wrap_stream(body));
        }

        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(TransportResponse { status, body })
    }
}
