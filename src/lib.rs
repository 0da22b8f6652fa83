pub mod api;
pub mod config;
pub mod events;
pub mod seoul_data;
pub mod tracing;
