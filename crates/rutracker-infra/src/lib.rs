//! # Rutracker Infrastructure
//!
//! Concrete implementations of the ports defined in `rutracker-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL stored-routine repository via SeaORM
//! - `telegram` - Telegram Bot API notifier via reqwest

pub mod database;
pub mod notify;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use notify::{DisabledNotifier, TelegramConfig};

#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresPostRepository};

#[cfg(feature = "telegram")]
pub use notify::TelegramNotifier;
