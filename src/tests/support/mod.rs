pub mod app_state_builder;
pub mod media_fixtures;
pub mod stubs;
