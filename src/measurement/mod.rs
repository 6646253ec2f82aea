//! Measurement input boundary
//!
//! This module turns untrusted raw values (numbers, numeric text, missing or
//! structured payload values) into a validated [`Measurement`]. Everything past
//! this boundary works with plain, already-valid `f64` values.

pub mod error;
pub mod parse;
pub mod raw;

// Re-export main types for convenient access
pub use error::{Field, ValidationError};
pub use parse::Measurement;
pub use raw::RawValue;
