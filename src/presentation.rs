//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering AppState
//! - Reusable form widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
