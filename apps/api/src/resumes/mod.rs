// Upload pipeline, persistence, and HTTP handlers for résumé records.

pub mod handlers;
pub mod store;
pub mod upload;
