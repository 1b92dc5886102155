pub mod api;
pub mod supabase_config;
