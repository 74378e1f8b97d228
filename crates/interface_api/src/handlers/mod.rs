//! Request handlers

pub mod auth;
pub mod contracting;
pub mod health;
