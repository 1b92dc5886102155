use std::env;

/// Connection details of the hosted backend (auth + object storage).
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash, e.g. `https://abc.supabase.co`.
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.into().trim().to_string(),
        }
    }

    /// Load from `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn from_env() -> Self {
        let url = env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        let anon_key = env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set");

        if !url.starts_with("http://") && !url.starts_with("https://") {
            panic!("SUPABASE_URL must be an http(s) URL");
        }

        Self::new(url, anon_key)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}
