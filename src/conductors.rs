//! Conductor gauges and insulation wall thicknesses.

use crate::units::{inches_to_mm, Scalar};

/// Stranded copper conductor.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductor {
    /// American Wire Gauge label, e.g. `AWG30`.
    pub gauge: &'static str,
    /// Strand construction, e.g. `7/38`. Informational only.
    pub stranding: &'static str,
    /// Overall conductor diameter in inches.
    pub diameter_in: Scalar,
}

impl Conductor {
    /// Creates a conductor entry.
    #[must_use]
    pub const fn new(gauge: &'static str, stranding: &'static str, diameter_in: Scalar) -> Self {
        Self {
            gauge,
            stranding,
            diameter_in,
        }
    }

    /// Conductor diameter in millimeters.
    #[must_use]
    pub fn diameter_mm(&self) -> Scalar {
        inches_to_mm(self.diameter_in)
    }
}

/// Seven strand hookup wire gauges, in table output order.
pub static CONDUCTORS: [Conductor; 5] = [
    Conductor::new("AWG30", "7/38", 0.012),
    Conductor::new("AWG28", "7/36", 0.015),
    Conductor::new("AWG26", "7/34", 0.019),
    Conductor::new("AWG24", "7/32", 0.024),
    Conductor::new("AWG22", "7/30", 0.030),
];

/// Insulation wall thicknesses in inches, in table output order.
pub static INSULATION_THICKNESSES: [Scalar; 12] = [
    0.006, 0.010, 0.011, 0.012, 0.015, 0.017, 0.018, 0.019, 0.030, 0.032, 0.045, 0.060,
];

/// Looks up a conductor by gauge label.
#[must_use]
pub fn find_conductor(gauge: &str) -> Option<&'static Conductor> {
    CONDUCTORS.iter().find(|c| c.gauge == gauge)
}
