//! Outbound chat notifications.

mod config;
mod disabled;

#[cfg(feature = "telegram")]
mod telegram;

pub use config::TelegramConfig;
pub use disabled::DisabledNotifier;

#[cfg(feature = "telegram")]
pub use telegram::TelegramNotifier;
