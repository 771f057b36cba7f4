//! Stranding correction factors.
//!
//! A stranded conductor behaves electrically like a solid conductor of slightly
//! smaller diameter. The factor scales the nominal diameter inside both
//! capacitance formulas.

use std::fmt;

use crate::units::Scalar;

/// Strand count of each conductor in the pair.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stranding {
    /// Single solid conductor.
    Solid,
    /// 7 strands.
    Seven,
    /// 19 strands.
    Nineteen,
    /// 37 strands.
    ThirtySeven,
    /// 61 strands.
    SixtyOne,
    /// 91 strands.
    NinetyOne,
}

/// Stranding used for the generated table. Select the entry matching the wire used.
pub const ACTIVE_STRANDING: Stranding = Stranding::Seven;

impl Stranding {
    /// Every supported construction, ordered by strand count.
    pub const ALL: [Self; 6] = [
        Self::Solid,
        Self::Seven,
        Self::Nineteen,
        Self::ThirtySeven,
        Self::SixtyOne,
        Self::NinetyOne,
    ];

    /// Number of strands per conductor.
    #[must_use]
    pub const fn strands(self) -> u32 {
        match self {
            Self::Solid => 1,
            Self::Seven => 7,
            Self::Nineteen => 19,
            Self::ThirtySeven => 37,
            Self::SixtyOne => 61,
            Self::NinetyOne => 91,
        }
    }

    /// Correction factor applied to the nominal conductor diameter, in (0, 1].
    #[must_use]
    pub const fn factor(self) -> Scalar {
        match self {
            Self::Solid => 1.000,
            Self::Seven => 0.939,
            Self::Nineteen => 0.970,
            Self::ThirtySeven => 0.980,
            Self::SixtyOne => 0.985,
            Self::NinetyOne => 0.988,
        }
    }

    /// Returns the construction with exactly `strands` strands, if tabulated.
    #[must_use]
    pub fn from_strands(strands: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.strands() == strands)
    }
}

impl Default for Stranding {
    fn default() -> Self {
        ACTIVE_STRANDING
    }
}

impl fmt::Display for Stranding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} strand (k = {:.3})", self.strands(), self.factor())
    }
}
