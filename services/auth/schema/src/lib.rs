//! sea-orm entities for the tables the auth service reads and writes.

pub mod auth_codes;
pub mod outbox_events;
pub mod roles;
pub mod users;
