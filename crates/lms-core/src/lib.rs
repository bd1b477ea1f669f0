//! Shared plumbing for LMS services: liveness handler, request ids and tracing setup.

pub mod health;
pub mod middleware;
pub mod tracing;
