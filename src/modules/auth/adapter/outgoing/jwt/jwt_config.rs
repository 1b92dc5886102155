use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub audience: String,
    /// Lowercased addresses treated as admins regardless of token metadata.
    pub admin_emails: Vec<String>,
}

impl JwtConfig {
    pub fn new(secret_key: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            audience: audience.into(),
            admin_emails: Vec::new(),
        }
    }

    pub fn with_admin_emails(mut self, raw: &str) -> Self {
        self.admin_emails = parse_admin_emails(raw);
        self
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        let secret_key =
            env::var("SUPABASE_JWT_SECRET").expect("SUPABASE_JWT_SECRET must be set");

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            panic!("SUPABASE_JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let audience =
            env::var("SUPABASE_JWT_AUDIENCE").unwrap_or_else(|_| "authenticated".to_string());
        let admin_emails = env::var("ADMIN_EMAILS").unwrap_or_default();

        Self::new(secret_key, audience).with_admin_emails(&admin_emails)
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.admin_emails.iter().any(|e| *e == email)
    }
}

fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
