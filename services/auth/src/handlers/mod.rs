pub mod admin;
pub mod auth_code;
pub mod health;
pub mod session;
