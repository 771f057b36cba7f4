//! Cross product table generation.
//!
//! Rows are produced material-major: for every dielectric, every conductor, and
//! for every conductor every insulation thickness, in table order. Each row
//! renders as one line of text suitable for `grep` and `sort -k`.

use std::fmt;
use std::io::Write;

use tracing::{debug, error, trace, warn};

use crate::capacitance::{PairCapacitance, PairGeometry};
use crate::conductors::{Conductor, CONDUCTORS, INSULATION_THICKNESSES};
use crate::errors::{Formula, UtpError};
use crate::materials::{DielectricMaterial, DIELECTRICS};
use crate::stranding::{Stranding, ACTIVE_STRANDING};
use crate::units::Scalar;

/// Tables and stranding used to generate a capacitance table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig<'a> {
    /// Insulation materials (outer loop).
    pub dielectrics: &'a [DielectricMaterial],
    /// Conductors (middle loop).
    pub conductors: &'a [Conductor],
    /// Insulation thicknesses in inches (inner loop).
    pub thicknesses: &'a [Scalar],
    /// Stranding applied to every conductor.
    pub stranding: Stranding,
}

impl Default for TableConfig<'static> {
    fn default() -> Self {
        Self {
            dielectrics: &DIELECTRICS,
            conductors: &CONDUCTORS,
            thicknesses: &INSULATION_THICKNESSES,
            stranding: ACTIVE_STRANDING,
        }
    }
}

impl<'a> TableConfig<'a> {
    /// Replaces the stranding.
    #[must_use]
    pub const fn with_stranding(mut self, stranding: Stranding) -> Self {
        self.stranding = stranding;
        self
    }

    /// Number of rows the table will contain.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.dielectrics.len() * self.conductors.len() * self.thicknesses.len()
    }

    /// Lazily evaluates every combination in output order.
    pub fn rows(&self) -> impl Iterator<Item = Result<TableRow<'a>, UtpError>> + 'a {
        let Self {
            dielectrics,
            conductors,
            thicknesses,
            stranding,
        } = *self;
        let k = stranding.factor();
        dielectrics.iter().flat_map(move |material| {
            conductors.iter().flat_map(move |conductor| {
                thicknesses
                    .iter()
                    .map(move |&thickness_in| TableRow::evaluate(material, conductor, thickness_in, k))
            })
        })
    }

    /// Writes one line per combination to `writer` and returns the line count.
    ///
    /// Stops at the first formula or I/O error. Formula errors are also logged
    /// at `ERROR` with the offending combination.
    pub fn write_table<W: Write>(&self, mut writer: W) -> Result<usize, UtpError> {
        debug!(
            rows = self.row_count(),
            stranding = %self.stranding,
            "generating capacitance table"
        );
        let mut written = 0;
        for row in self.rows() {
            let row = row.inspect_err(|err| {
                error!(%err, after = written, "capacitance table aborted");
            })?;
            trace!(
                gauge = row.conductor.gauge,
                material = row.material.name,
                thickness = row.thickness_in,
                "row"
            );
            writeln!(writer, "{row}")?;
            written += 1;
        }
        writer.flush()?;
        debug!(written, "capacitance table complete");
        Ok(written)
    }

    /// Verifies that every conductor and thickness pairing gives logarithm
    /// arguments strictly above one, so every estimate is finite and positive.
    ///
    /// An argument at or below one is reported as
    /// [`UtpError::LogArgumentNotAboveOne`] and logged at `WARN`. A conductor whose
    /// `k D` product is zero has no argument at all and is reported as
    /// [`UtpError::DivisionByZero`].
    pub fn check_log_arguments(&self) -> Result<(), UtpError> {
        let k = self.stranding.factor();
        for conductor in self.conductors {
            for &thickness in self.thicknesses {
                let geometry = PairGeometry::new(conductor.diameter_in, thickness, k);
                let arguments = [
                    (Formula::GeneralCable, geometry.general_cable_log_argument()?),
                    (Formula::HowardJohnson, geometry.howard_johnson_log_argument()?),
                ];
                for (formula, argument) in arguments {
                    if argument <= 1.0 || argument.is_nan() {
                        warn!(
                            gauge = conductor.gauge,
                            thickness,
                            %formula,
                            argument,
                            "log argument not above 1"
                        );
                        return Err(UtpError::LogArgumentNotAboveOne {
                            gauge: conductor.gauge,
                            thickness,
                            formula,
                            argument,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// One evaluated combination of material, conductor and insulation thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow<'a> {
    /// Insulation material.
    pub material: &'a DielectricMaterial,
    /// Conductor.
    pub conductor: &'a Conductor,
    /// Insulation thickness in inches.
    pub thickness_in: Scalar,
    /// Both capacitance estimates.
    pub capacitance: PairCapacitance,
}

impl<'a> TableRow<'a> {
    /// Evaluates both formulas for one combination with stranding factor `k`.
    pub fn evaluate(
        material: &'a DielectricMaterial,
        conductor: &'a Conductor,
        thickness_in: Scalar,
        k: Scalar,
    ) -> Result<Self, UtpError> {
        let geometry = PairGeometry::new(conductor.diameter_in, thickness_in, k);
        Ok(Self {
            material,
            conductor,
            thickness_in,
            capacitance: PairCapacitance::evaluate(material.dielectric_constant, &geometry)?,
        })
    }
}

impl fmt::Display for TableRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gc = self.capacitance.general_cable;
        let hj = self.capacitance.howard_johnson;
        write!(
            f,
            "{} {:.3} inch thick {} = {:5.2} pf/ft {:5.4} pf/mm (General Cable) {:5.2} pf/ft {:5.4} pf/mm (Howard Johnson)",
            self.conductor.gauge,
            self.thickness_in,
            self.material.name,
            gc.pf_per_ft,
            gc.pf_per_mm,
            hj.pf_per_ft,
            hj.pf_per_mm,
        )
    }
}
