//! Insulation dielectric materials.

use crate::units::Scalar;

/// Insulation material characterized by its relative permittivity.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DielectricMaterial {
    /// Trade or chemical name as printed in the table.
    pub name: &'static str,
    /// Relative permittivity εr (dimensionless, > 0).
    pub dielectric_constant: Scalar,
}

impl DielectricMaterial {
    /// Creates a material entry.
    #[must_use]
    pub const fn new(name: &'static str, dielectric_constant: Scalar) -> Self {
        Self {
            name,
            dielectric_constant,
        }
    }
}

/// Common hookup wire insulations, in table output order.
pub static DIELECTRICS: [DielectricMaterial; 16] = [
    DielectricMaterial::new("ECTFE/Halar", 2.60),
    DielectricMaterial::new("PFA/Teflon", 2.15),
    DielectricMaterial::new("PVC", 5.00),
    DielectricMaterial::new("PVC(Semi-rigid)", 3.60),
    DielectricMaterial::new("PVDF/Kynar/SOLEF", 7.70),
    DielectricMaterial::new("Polyethylene", 2.29),
    DielectricMaterial::new("Polypropylene", 2.25),
    DielectricMaterial::new("Polyurethane", 6.50),
    DielectricMaterial::new("Rubber(butyl)", 4.0),
    DielectricMaterial::new("Rubber(natural)", 5.0),
    DielectricMaterial::new("Rubber(SBR)", 4.0),
    DielectricMaterial::new("Rubber(silicone)", 3.1),
    DielectricMaterial::new("TFE/Teflon", 2.1),
    DielectricMaterial::new("TPE", 5.0),
    DielectricMaterial::new("Teflon", 2.10),
    DielectricMaterial::new("Tefzel", 2.6),
];

/// Looks up a material by its exact table name.
#[must_use]
pub fn find_dielectric(name: &str) -> Option<&'static DielectricMaterial> {
    DIELECTRICS.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = DIELECTRICS.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), DIELECTRICS.len());
    }

    #[test]
    fn constants_are_positive() {
        assert!(DIELECTRICS.iter().all(|m| m.dielectric_constant > 0.0));
    }

    #[test]
    fn lookup_by_name() {
        let pvdf = find_dielectric("PVDF/Kynar/SOLEF").expect("PVDF is tabulated");
        assert_eq!(pvdf.dielectric_constant, 7.70);
        assert!(find_dielectric("pvc").is_none());
    }
}
