pub mod auth;
pub mod comments;
pub mod multimedia;
pub mod tags;
