//! Services layer - business operations.
//!
//! This module contains business logic and operations:
//! - Appearance pane logic (theme selection, auto-switch)

pub mod appearance;
