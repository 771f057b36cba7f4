//! Scalar alias and per-unit-length conversions.
//!
//! Geometry is carried in inches and capacitance in picofarads per foot, the
//! units both empirical formulas are published in.

use crate::constants::{MM_PER_FT, MM_PER_INCH};

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Converts a per-foot quantity to the same quantity per millimeter.
#[inline]
#[must_use]
pub fn per_foot_to_per_mm(per_foot: Scalar) -> Scalar {
    per_foot / MM_PER_FT
}

/// Converts a length in inches to millimeters.
#[inline]
#[must_use]
pub fn inches_to_mm(inches: Scalar) -> Scalar {
    inches * MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn one_picofarad_per_foot_in_millimeters() {
        assert_relative_eq!(per_foot_to_per_mm(304.8), 1.0, max_relative = 1.0e-12);
        assert_relative_eq!(per_foot_to_per_mm(1.0), 1.0 / 304.8, max_relative = 1.0e-12);
    }

    #[test]
    fn awg30_diameter_in_millimeters() {
        assert_relative_eq!(inches_to_mm(0.012), 0.3048, max_relative = 1.0e-12);
    }
}
