//! Empirical capacitance formulas for a twisted pair of insulated round wires.
//!
//! Both formulas model the pair as two parallel cylinders whose center spacing is
//! the insulated diameter `2t + D`, with the conductor diameter `D` reduced by the
//! stranding factor `k`. They differ in the spacing multiplier and, importantly,
//! in the logarithm base: General Cable uses `log10`, Howard Johnson uses `ln`.
//!
//! Arithmetic is evaluated in a fixed order so that printed tables are
//! reproducible to the last digit.

use crate::constants::{
    GENERAL_CABLE_COEFFICIENT, GENERAL_CABLE_SPACING, HOWARD_JOHNSON_COEFFICIENT,
    HOWARD_JOHNSON_SPACING, INCHES_PER_FOOT,
};
use crate::errors::{Formula, UtpError};
use crate::units::{per_foot_to_per_mm, Scalar};

/// Cross-section of one insulated conductor in the pair.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairGeometry {
    /// Nominal conductor diameter `D` in inches.
    pub diameter_in: Scalar,
    /// Insulation wall thickness `t` in inches.
    pub thickness_in: Scalar,
    /// Stranding correction factor `k`.
    pub stranding_factor: Scalar,
}

impl PairGeometry {
    /// Creates a geometry descriptor.
    #[must_use]
    pub const fn new(diameter_in: Scalar, thickness_in: Scalar, stranding_factor: Scalar) -> Self {
        Self {
            diameter_in,
            thickness_in,
            stranding_factor,
        }
    }

    /// Insulated wire diameter `2t + D`, equal to the conductor center spacing.
    #[must_use]
    pub fn insulated_diameter_in(&self) -> Scalar {
        (2.0 * self.thickness_in) + self.diameter_in
    }

    /// Effective electrical conductor diameter `k D`.
    #[must_use]
    pub fn effective_diameter_in(&self) -> Scalar {
        self.stranding_factor * self.diameter_in
    }

    fn log_argument(&self, formula: Formula, spacing: Scalar) -> Result<Scalar, UtpError> {
        let denominator = self.effective_diameter_in();
        if denominator == 0.0 {
            return Err(UtpError::DivisionByZero {
                formula,
                divisor: "stranding factor × diameter",
            });
        }
        Ok((spacing * self.insulated_diameter_in()) / denominator)
    }

    /// Argument of the General Cable base-10 logarithm, `1.3 (2t + D) / (k D)`.
    pub fn general_cable_log_argument(&self) -> Result<Scalar, UtpError> {
        self.log_argument(Formula::GeneralCable, GENERAL_CABLE_SPACING)
    }

    /// Argument of the Howard Johnson natural logarithm, `2 (2t + D) / (k D)`.
    pub fn howard_johnson_log_argument(&self) -> Result<Scalar, UtpError> {
        self.log_argument(Formula::HowardJohnson, HOWARD_JOHNSON_SPACING)
    }
}

/// Evaluates `log` on `argument`, rejecting arguments the logarithm or the
/// following division cannot handle.
fn checked_log(
    formula: Formula,
    argument: Scalar,
    log: impl Fn(Scalar) -> Scalar,
) -> Result<Scalar, UtpError> {
    if argument <= 0.0 || argument.is_nan() {
        return Err(UtpError::LogDomain { formula, argument });
    }
    let value = log(argument);
    if value == 0.0 {
        return Err(UtpError::DivisionByZero {
            formula,
            divisor: "logarithm",
        });
    }
    Ok(value)
}

/// General Cable capacitance in pF/ft:
/// `2.2 εr / log10(1.3 (2t + D) / (k D))`.
pub fn general_cable_pf_per_ft(
    dielectric_constant: Scalar,
    geometry: &PairGeometry,
) -> Result<Scalar, UtpError> {
    let argument = geometry.general_cable_log_argument()?;
    let log = checked_log(Formula::GeneralCable, argument, Scalar::log10)?;
    Ok((GENERAL_CABLE_COEFFICIENT * dielectric_constant) / log)
}

/// Howard Johnson capacitance in pF/ft:
/// `(12 × 0.7065) / ln(2 (2t + D) / (k D)) × εr`.
pub fn howard_johnson_pf_per_ft(
    dielectric_constant: Scalar,
    geometry: &PairGeometry,
) -> Result<Scalar, UtpError> {
    let argument = geometry.howard_johnson_log_argument()?;
    let log = checked_log(Formula::HowardJohnson, argument, Scalar::ln)?;
    Ok((INCHES_PER_FOOT * HOWARD_JOHNSON_COEFFICIENT) / log * dielectric_constant)
}

/// Capacitance per unit length in both table units.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitancePerLength {
    /// Picofarads per foot.
    pub pf_per_ft: Scalar,
    /// Picofarads per millimeter.
    pub pf_per_mm: Scalar,
}

impl CapacitancePerLength {
    /// Builds both units from a per-foot value.
    #[must_use]
    pub fn from_pf_per_ft(pf_per_ft: Scalar) -> Self {
        Self {
            pf_per_ft,
            pf_per_mm: per_foot_to_per_mm(pf_per_ft),
        }
    }
}

/// Both formula estimates for one pair construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairCapacitance {
    /// General Cable catalog estimate.
    pub general_cable: CapacitancePerLength,
    /// Howard Johnson estimate.
    pub howard_johnson: CapacitancePerLength,
}

impl PairCapacitance {
    /// Evaluates both formulas for insulation `dielectric_constant` and `geometry`.
    pub fn evaluate(dielectric_constant: Scalar, geometry: &PairGeometry) -> Result<Self, UtpError> {
        Ok(Self {
            general_cable: CapacitancePerLength::from_pf_per_ft(general_cable_pf_per_ft(
                dielectric_constant,
                geometry,
            )?),
            howard_johnson: CapacitancePerLength::from_pf_per_ft(howard_johnson_pf_per_ft(
                dielectric_constant,
                geometry,
            )?),
        })
    }
}
