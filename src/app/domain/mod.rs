//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Application settings and the Theme enum
//! - Message types for the event system

pub mod messages;
pub mod settings;

pub use messages::Message;
pub use settings::{AppSettings, Theme};
