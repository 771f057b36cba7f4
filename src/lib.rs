#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Unit conversion constants and empirical formula coefficients.
pub mod constants;
/// Scalar alias and per-unit-length conversions.
pub mod units;
/// Insulation dielectric materials.
pub mod materials;
/// Conductor gauges and insulation thicknesses.
pub mod conductors;
/// Stranding correction factors.
pub mod stranding;
/// Empirical twisted pair capacitance formulas.
pub mod capacitance;
/// Cross product table generation and formatting.
pub mod table;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
