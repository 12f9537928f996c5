//! Shared plumbing for huddle services: health checks, request ids, tracing
//! initialisation and timestamp serialization.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
