pub mod auth_gateway_supabase;
pub mod jwt;
