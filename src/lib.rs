//! # unitui - terminal unit converter
//!
//! Converts values between units of length, weight and temperature using a
//! static lookup table, with a ratatui form on top and an Elm-like core for
//! predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Domain** (`domain`): the conversion table, lookup and formatting
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`, `core::raw_msg`): events that can change the state
//! - **Update** (`core::update`): pure function that transforms state
//! - **Command** (`core::cmd`): side effects (rendering, logging)
//! - **View** (`presentation`): components and widgets drawing the state
//!
//! ## Example Usage
//!
//! ```rust
//! use unitui::{core::msg::form::FormMsg, AppState, Msg, update};
//!
//! let state = AppState::default();
//! let (state, _) = update(Msg::Form(FormMsg::PasteValue("1500".to_string())), state);
//! let (state, _) = update(Msg::Form(FormMsg::Submit), state);
//!
//! let outcome = state.form.outcome().expect("Meters to Kilometers exists");
//! assert!((outcome.result - 1.5).abs() < 1e-9);
//! ```
//!
//! The lookup itself is available without any of the UI:
//!
//! ```rust
//! assert_eq!(unitui::convert(100.0, "Weight", "Kilograms", "Grams"), Some(100000.0));
//! assert_eq!(unitui::convert(5.0, "Length", "Meters", "Liters"), None);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use domain::conversion::{convert, Conversion, ConversionRequest, ConversionTable, TABLE};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
