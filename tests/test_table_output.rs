//! Full table output tests.
//!
//! Golden files in tests/data were captured from the reference table generator
//! with 7 strand and solid conductors.

use approx::assert_relative_eq;
use utp_capacitance::prelude::*;

const SEVEN_STRAND_TABLE: &str = include_str!("data/utp_table_7_strand.txt");
const SOLID_TABLE: &str = include_str!("data/utp_table_solid.txt");

fn render(config: &TableConfig<'_>) -> String {
    let mut out = Vec::new();
    config.write_table(&mut out).expect("table renders");
    String::from_utf8(out).expect("table is utf-8")
}

#[test]
fn test_default_table_matches_reference_output() {
    let table = render(&TableConfig::default());
    assert_eq!(table, SEVEN_STRAND_TABLE);
}

#[test]
fn test_solid_table_matches_reference_output() {
    let table = render(&TableConfig::default().with_stranding(Stranding::Solid));
    assert_eq!(table, SOLID_TABLE);
}

#[test]
fn test_line_count() {
    let mut out = Vec::new();
    let written = TableConfig::default().write_table(&mut out).unwrap();
    assert_eq!(written, 16 * 5 * 12);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 960);
}

#[test]
fn test_rows_are_material_major() {
    let config = TableConfig::default();
    let rows: Vec<_> = config.rows().collect::<Result<_, _>>().unwrap();

    for (i, row) in rows.iter().enumerate() {
        let material = &DIELECTRICS[i / 60];
        let conductor = &CONDUCTORS[(i / 12) % 5];
        let thickness = INSULATION_THICKNESSES[i % 12];
        assert_eq!(row.material.name, material.name);
        assert_eq!(row.conductor.gauge, conductor.gauge);
        assert_eq!(row.thickness_in, thickness);
    }

    let first = rows.first().unwrap();
    assert_eq!(
        (first.material.name, first.conductor.gauge),
        ("ECTFE/Halar", "AWG30")
    );
    let last = rows.last().unwrap();
    assert_eq!((last.material.name, last.conductor.gauge), ("Tefzel", "AWG22"));
    assert_eq!(last.thickness_in, 0.060);
}

#[test]
fn test_every_estimate_is_positive_and_consistent() {
    for stranding in Stranding::ALL {
        let config = TableConfig::default().with_stranding(stranding);
        for row in config.rows() {
            let row = row.unwrap();
            for c in [row.capacitance.general_cable, row.capacitance.howard_johnson] {
                assert!(c.pf_per_ft > 0.0 && c.pf_per_ft.is_finite());
                assert_relative_eq!(c.pf_per_mm, c.pf_per_ft / 304.8, max_relative = 1.0e-9);
            }
        }
    }
}

#[test]
fn test_solid_conductors_raise_every_estimate() {
    let stranded = TableConfig::default().with_stranding(Stranding::Seven);
    let solid = TableConfig::default().with_stranding(Stranding::Solid);
    for (a, b) in stranded.rows().zip(solid.rows()) {
        let (a, b) = (a.unwrap(), b.unwrap());
        assert!(b.capacitance.general_cable.pf_per_ft > a.capacitance.general_cable.pf_per_ft);
        assert!(b.capacitance.howard_johnson.pf_per_ft > a.capacitance.howard_johnson.pf_per_ft);
    }
}

#[test]
fn test_generation_is_idempotent() {
    let config = TableConfig::default();
    assert_eq!(render(&config), render(&config));
}

#[test]
fn test_halar_awg30_scenario() {
    let halar = find_dielectric("ECTFE/Halar").unwrap();
    let awg30 = find_conductor("AWG30").unwrap();
    let row = TableRow::evaluate(halar, awg30, 0.006, Stranding::Seven.factor()).unwrap();

    let argument: Scalar = (1.3 * ((2.0 * 0.006) + 0.012)) / (0.939 * 0.012);
    let expected = (2.2 * 2.60) / argument.log10();
    assert_eq!(
        format!("{:.2}", row.capacitance.general_cable.pf_per_ft),
        format!("{expected:.2}")
    );
    assert_eq!(format!("{expected:.2}"), "12.93");
}
