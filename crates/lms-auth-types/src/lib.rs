//! Session credential types for the LMS services.
//!
//! Provides session-token signing and validation, the session cookie builders,
//! and identity resolution from request headers.

pub mod cookie;
pub mod identity;
pub mod token;
