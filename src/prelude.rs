//! Convenience re-exports for building capacitance tables.

pub use crate::capacitance::{
    general_cable_pf_per_ft, howard_johnson_pf_per_ft, CapacitancePerLength, PairCapacitance,
    PairGeometry,
};
pub use crate::conductors::{find_conductor, Conductor, CONDUCTORS, INSULATION_THICKNESSES};
pub use crate::constants::*;
pub use crate::errors::{Formula, UtpError};
pub use crate::materials::{find_dielectric, DielectricMaterial, DIELECTRICS};
pub use crate::stranding::{Stranding, ACTIVE_STRANDING};
pub use crate::table::{TableConfig, TableRow};
pub use crate::units::{inches_to_mm, per_foot_to_per_mm, Scalar};
