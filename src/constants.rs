//! Unit conversion constants and the coefficients of the empirical formulas.
//!
//! ## References
//!
//! - General Cable Electronics Wire & Cable Catalog, 2010, page 203,
//!   "Cable Design Equations - Balanced Pair, Capacitance (Unshielded Twisted Pair)".
//! - Howard Johnson & Martin Graham, "High Speed Digital Design - A Handbook of
//!   Black Magic", Prentice Hall, 1993, page 428.

use crate::units::Scalar;

/// Millimeters per inch. Exact by definition of the international inch.
pub const MM_PER_INCH: Scalar = 25.4;
/// Inches per foot.
pub const INCHES_PER_FOOT: Scalar = 12.0;
/// Millimeters per foot, 25.4 × 12 = 304.8.
pub const MM_PER_FT: Scalar = MM_PER_INCH * INCHES_PER_FOOT;

/// General Cable numerator coefficient (pF/ft per unit dielectric constant).
pub const GENERAL_CABLE_COEFFICIENT: Scalar = 2.2;
/// General Cable geometry multiplier inside the base-10 logarithm.
pub const GENERAL_CABLE_SPACING: Scalar = 1.3;

/// Howard Johnson coefficient in pF/inch per unit dielectric constant.
pub const HOWARD_JOHNSON_COEFFICIENT: Scalar = 0.7065;
/// Howard Johnson geometry multiplier inside the natural logarithm.
pub const HOWARD_JOHNSON_SPACING: Scalar = 2.0;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn millimeters_per_foot_matches_reference() {
        assert_relative_eq!(MM_PER_FT, 304.8, max_relative = 1.0e-12);
    }
}
