//! Bulky/heavy predicates and the top-level classify operation.

use serde::Serialize;

use super::category::Category;
use super::thresholds::Thresholds;
use crate::measurement::{Measurement, RawValue, ValidationError};

/// Outcome of classifying one measurement, with the intermediate predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Final dispatch category
    pub category: Category,
    /// Whether the volume or any single dimension met the bulk thresholds
    pub bulky: bool,
    /// Whether the mass met the mass threshold
    pub heavy: bool,
}

/// Package classifier bound to a fixed set of thresholds.
///
/// A classifier holds no mutable state; it can be shared freely across
/// threads and every call with the same input yields the same result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    /// Create a classifier using the given thresholds.
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// The thresholds this classifier applies.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Returns true if the volume or any dimension reaches the bulk thresholds.
    ///
    /// Inputs are assumed to be already validated.
    pub fn is_bulky(&self, width: f64, height: f64, length: f64) -> bool {
        let volume = width * height * length;

        volume >= self.thresholds.volume
            || width >= self.thresholds.dimension
            || height >= self.thresholds.dimension
            || length >= self.thresholds.dimension
    }

    /// Returns true if the mass reaches the mass threshold.
    ///
    /// The input is assumed to be already validated.
    pub fn is_heavy(&self, mass: f64) -> bool {
        mass >= self.thresholds.mass
    }

    /// Evaluate both predicates and the decision table for a validated measurement.
    pub fn assess(&self, measurement: &Measurement) -> Assessment {
        let bulky = self.is_bulky(
            measurement.width(),
            measurement.height(),
            measurement.length(),
        );
        let heavy = self.is_heavy(measurement.mass());

        Assessment {
            category: Category::from_flags(bulky, heavy),
            bulky,
            heavy,
        }
    }

    /// Classify a validated measurement.
    pub fn classify_measurement(&self, measurement: &Measurement) -> Category {
        self.assess(measurement).category
    }

    /// Validate four raw inputs and classify them.
    ///
    /// Any [`ValidationError`] is returned unchanged; classification never
    /// runs on invalid input.
    pub fn classify(
        &self,
        width: impl Into<RawValue>,
        height: impl Into<RawValue>,
        length: impl Into<RawValue>,
        mass: impl Into<RawValue>,
    ) -> Result<Category, ValidationError> {
        let measurement = Measurement::parse(width, height, length, mass)?;
        Ok(self.classify_measurement(&measurement))
    }
}

/// Classify a package from raw width, height, length (cm) and mass (kg)
/// using the default thresholds.
///
/// Each argument may be a number, numeric text, an `Option`, or a
/// `serde_json::Value`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if any input is missing, non-numeric,
/// non-finite, zero, or negative.
///
/// # Examples
///
/// ```
/// use parcelsort::{classify, Category};
///
/// assert_eq!(classify(150.0, 10.0, 10.0, 20.0)?, Category::Rejected);
/// assert_eq!(classify("149.9", "10", "10", "5")?, Category::Standard);
/// # Ok::<(), parcelsort::ValidationError>(())
/// ```
pub fn classify(
    width: impl Into<RawValue>,
    height: impl Into<RawValue>,
    length: impl Into<RawValue>,
    mass: impl Into<RawValue>,
) -> Result<Category, ValidationError> {
    Classifier::default().classify(width, height, length, mass)
}

/// Bulk check against the default thresholds. Does not re-validate.
pub fn is_bulky(width: f64, height: f64, length: f64) -> bool {
    Classifier::default().is_bulky(width, height, length)
}

/// Mass check against the default thresholds. Does not re-validate.
pub fn is_heavy(mass: f64) -> bool {
    Classifier::default().is_heavy(mass)
}
