//! Sorting thresholds.

use serde::Deserialize;

/// Fixed limits that decide whether a package is bulky or heavy.
///
/// Every comparison against these limits is inclusive: a package exactly at
/// a threshold already counts as bulky or heavy.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Volume in cm³ at or above which a package is bulky
    pub volume: f64,
    /// Single dimension in cm at or above which a package is bulky
    pub dimension: f64,
    /// Mass in kg at or above which a package is heavy
    pub mass: f64,
}

impl Thresholds {
    /// Compiled-in dispatch limits: 1,000,000 cm³, 150 cm, 20 kg.
    pub const DEFAULT: Thresholds = Thresholds {
        volume: 1_000_000.0,
        dimension: 150.0,
        mass: 20.0,
    };

    /// Create a custom threshold set.
    pub fn new(volume: f64, dimension: f64, mass: f64) -> Self {
        Self {
            volume,
            dimension,
            mass,
        }
    }

    /// Threshold values paired with their names, for validation and reporting.
    pub fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("volume", self.volume),
            ("dimension", self.dimension),
            ("mass", self.mass),
        ]
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
