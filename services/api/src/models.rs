//! API models for request and response payloads

pub mod author;
pub mod user;
