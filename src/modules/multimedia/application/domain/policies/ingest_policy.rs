use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct IngestPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    /// Upper bound on parts in one multipart submission.
    pub max_files: usize,
    /// Upper bound on bytes buffered for one multipart submission.
    pub max_submission_bytes: u64,
    pub submission_timeout: Duration,
    pub bucket_name: String,
}

impl Default for IngestPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
            max_files: Self::DEFAULT_MAX_FILES,
            max_submission_bytes: Self::DEFAULT_MAX_SUBMISSION_BYTES,
            submission_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            bucket_name: Self::DEFAULT_BUCKET_NAME.to_string(),
        }
    }
}

impl IngestPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "media";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024; // 100 MiB
    pub const DEFAULT_MAX_FILES: usize = 20;
    pub const DEFAULT_MAX_SUBMISSION_BYTES: u64 = 500 * 1024 * 1024; // 500 MiB
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

    /// Env vars: `MEDIA_BUCKET`, `MAX_UPLOAD_BYTES`, `MAX_UPLOAD_FILES`,
    /// `MAX_SUBMISSION_BYTES`, `INGEST_TIMEOUT_SECS`.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |key: &str| std::env::var(key).ok();

        let bucket_name = var("MEDIA_BUCKET")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.bucket_name);

        Self {
            max_file_size_bytes: positive_or(
                var("MAX_UPLOAD_BYTES").as_deref(),
                defaults.max_file_size_bytes,
            ),
            max_file_name_len: defaults.max_file_name_len,
            max_files: positive_or(var("MAX_UPLOAD_FILES").as_deref(), defaults.max_files),
            max_submission_bytes: positive_or(
                var("MAX_SUBMISSION_BYTES").as_deref(),
                defaults.max_submission_bytes,
            ),
            submission_timeout: Duration::from_secs(positive_or(
                var("INGEST_TIMEOUT_SECS").as_deref(),
                defaults.submission_timeout.as_secs(),
            )),
            bucket_name,
        }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn with_limits(max_file_size_bytes: u64, submission_timeout: Duration) -> Self {
        Self {
            max_file_size_bytes,
            submission_timeout,
            ..Self::default()
        }
    }

    pub fn with_submission_caps(mut self, max_files: usize, max_submission_bytes: u64) -> Self {
        self.max_files = max_files;
        self.max_submission_bytes = max_submission_bytes;
        self
    }
}

fn positive_or<T>(raw: Option<&str>, default: T) -> T
where
    T: FromStr + PartialOrd + Default,
{
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
        .unwrap_or(default)
}
