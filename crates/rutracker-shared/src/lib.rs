//! # Rutracker Shared
//!
//! Request and response shapes of the HTTP API.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
