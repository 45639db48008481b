//! # Rutracker Core
//!
//! The domain layer of the rutracker posts service.
//! This crate contains the post model, the error taxonomy and the ports
//! that infrastructure implements. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
