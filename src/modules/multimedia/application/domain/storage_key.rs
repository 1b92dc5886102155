use chrono::Utc;
use rand::Rng;
use std::path::Path;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 8;
const MAX_EXT_LEN: usize = 10;
const FALLBACK_EXT: &str = "bin";

/// Lower-case alphanumeric extension of `file_name`, or `bin`.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| {
            !s.is_empty() && s.len() <= MAX_EXT_LEN && s.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .unwrap_or_else(|| FALLBACK_EXT.to_string())
}

/// Basename of a client-supplied file name with control characters removed.
/// Browsers may send full paths, with either separator.
pub fn sanitize_file_name(file_name: &str, max_len: usize) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    base.chars()
        .filter(|c| !c.is_control())
        .take(max_len)
        .collect()
}

/// `{unix_millis}-{random base36}.{ext}`; no user-controlled path segments.
pub fn generate_storage_key(original_name: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();

    format!(
        "{}-{}.{}",
        Utc::now().timestamp_millis(),
        suffix,
        extension_of(original_name)
    )
}
