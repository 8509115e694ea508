//! Domain logic
//!
//! This module contains the conversion core:
//! - The static conversion table and its lookup
//! - Formatting of conversion results

pub mod conversion;
pub mod format;
