// Adapters layer: concrete implementations for external systems (HTTP, job-listing APIs).

pub mod http;
pub mod sources;
