//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Settings, Theme, Messages)
//! - `services/` - Business operations (appearance pane logic)
//! - `infrastructure/` - External integrations (platform detection, errors)
//! - `state.rs` - Main application coordinator

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Message, Theme};
pub use infrastructure::platform::{is_dark_mode_enabled, supports_dark_mode};
pub use services::appearance::DarkModeSupport;
