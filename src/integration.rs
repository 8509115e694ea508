//! Integration layer
//!
//! Wires the Elm core to the outside world:
//! - Runtime (queues, update cycle, command execution)
//! - AppRunner (terminal event loop and rendering)
//! - Headless one-shot commands

pub mod app_runner;
pub mod headless;
pub mod runtime;
