// Infrastructure layer (shared components)
pub mod config;
pub mod error;

// Domain layer (dispatch pipeline)
pub mod dispatch;
pub mod mail;
pub mod template;

// Application layer
pub mod api;
pub mod server;
