//! Shared error types used across submodules.

use std::fmt;

use thiserror::Error;

use crate::units::Scalar;

/// Empirical formula that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// General Cable catalog equation (base-10 logarithm).
    GeneralCable,
    /// Howard Johnson equation (natural logarithm).
    HowardJohnson,
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeneralCable => f.write_str("General Cable"),
            Self::HowardJohnson => f.write_str("Howard Johnson"),
        }
    }
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum UtpError {
    /// Logarithm argument is zero, negative or NaN.
    #[error("{formula} formula: math domain error, log of {argument}")]
    LogDomain {
        /// Formula being evaluated.
        formula: Formula,
        /// Offending logarithm argument.
        argument: Scalar,
    },
    /// A divisor in the formula evaluated to zero.
    #[error("{formula} formula: division by zero ({divisor} is 0)")]
    DivisionByZero {
        /// Formula being evaluated.
        formula: Formula,
        /// Which divisor vanished.
        divisor: &'static str,
    },
    /// A table combination does not give a logarithm argument above one.
    #[error("{gauge} with {thickness} inch insulation: {formula} log argument {argument} is not above 1")]
    LogArgumentNotAboveOne {
        /// Conductor gauge label.
        gauge: &'static str,
        /// Insulation thickness in inches.
        thickness: Scalar,
        /// Formula being checked.
        formula: Formula,
        /// Offending logarithm argument.
        argument: Scalar,
    },
    /// Writing the table failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
