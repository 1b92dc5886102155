pub mod display_resolver;
pub mod embed_source;
pub mod entities;
pub mod optimistic_counter;
pub mod policies;
pub mod progress;
pub mod storage_key;
