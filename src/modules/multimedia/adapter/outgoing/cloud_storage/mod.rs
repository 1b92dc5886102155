mod storage_supabase;

pub use storage_supabase::SupabaseObjectStorage;
