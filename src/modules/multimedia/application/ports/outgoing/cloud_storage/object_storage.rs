use async_trait::async_trait;
use bytes::Bytes;

use crate::auth::application::domain::entities::Session;
use crate::multimedia::application::domain::progress::ProgressSlot;

// ============================================================================
// Domain Types
// ============================================================================

/// Bytes to write under `key`.
#[derive(Debug, Clone)]
pub struct UploadObject {
    pub key: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadObject {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub public_url: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage access denied")]
    AccessDenied,

    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Object rejected as too large")]
    PayloadTooLarge,

    #[error("Storage transport error: {0}")]
    Transport(String),
}

// ============================================================================
// Port
// ============================================================================

/// The one upload primitive every ingestion path goes through.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Streams `object` to the bucket, reporting bytes sent through `progress`.
    async fn upload(
        &self,
        session: &Session,
        object: UploadObject,
        progress: &ProgressSlot,
    ) -> Result<StoredObject, StorageError>;

    /// Deterministic public URL for `key`. No I/O.
    fn public_url(&self, key: &str) -> String;

    async fn delete(&self, session: &Session, key: &str) -> Result<(), StorageError>;
}
