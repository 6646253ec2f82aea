//! Parcelsort - package dispatch sorter
//!
//! Classifies a package into one of three handling stacks based on its
//! dimensions (cm) and mass (kg):
//!
//! - **STANDARD**: neither bulky nor heavy
//! - **SPECIAL**: bulky or heavy, but not both
//! - **REJECTED**: both bulky and heavy
//!
//! ```
//! use parcelsort::{classify, Category};
//!
//! assert_eq!(classify(100.0, 100.0, 100.0, 10.0)?, Category::Special);
//! assert_eq!(classify("10", "10", "10", "5.5")?, Category::Standard);
//! assert!(classify(-1.0, 1.0, 1.0, 1.0).is_err());
//! # Ok::<(), parcelsort::ValidationError>(())
//! ```

pub mod logging;
pub mod measurement;
pub mod settings;
pub mod sorting;

// Re-export main types for convenient access
pub use measurement::{Field, Measurement, RawValue, ValidationError};
pub use settings::{SettingsError, SortingConfig};
pub use sorting::{classify, is_bulky, is_heavy, Assessment, Category, Classifier, Thresholds};
