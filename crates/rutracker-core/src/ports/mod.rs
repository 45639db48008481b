//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod notifier;
mod repository;

pub use notifier::Notifier;
pub use repository::PostRepository;
