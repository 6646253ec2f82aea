//! Package sorting module
//!
//! This module holds the decision logic: the bulky and heavy predicates over
//! validated values, the decision table that turns them into a [`Category`],
//! and the top-level [`classify`] operation over untrusted input.

pub mod category;
pub mod classifier;
pub mod thresholds;

// Re-export main types for convenient access
pub use category::Category;
pub use classifier::{classify, is_bulky, is_heavy, Assessment, Classifier};
pub use thresholds::Thresholds;
