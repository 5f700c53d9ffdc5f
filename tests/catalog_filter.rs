//! 카탈로그 검증과 필터/패싯 동작 테스트.

use material_viewer::catalog::{self, DataError, MaterialRecord};
use material_viewer::filter;

fn sample(id: &'static str, name: &'static str, heat: &'static str) -> MaterialRecord {
    MaterialRecord {
        standard: "ANSI",
        id,
        name,
        heat_treatment: heat,
        su: 420.0,
        sy: 315.0,
        a5: 39.0,
        bhn: 126.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    }
}

#[test]
fn shipped_catalog_is_valid() {
    catalog::validate(catalog::materials()).expect("built-in catalog must validate");
}

#[test]
fn shipped_catalog_ids_are_unique() {
    let mats = catalog::materials();
    for (i, a) in mats.iter().enumerate() {
        for b in &mats[i + 1..] {
            assert!(
                !a.id.eq_ignore_ascii_case(b.id),
                "duplicate id {}",
                a.id
            );
        }
    }
}

#[test]
fn find_material_ignores_case() {
    let m = catalog::find_material("1015-ar").expect("known id");
    assert_eq!(m.id, "1015-AR");
    assert!(catalog::find_material("no-such-id").is_none());
}

#[test]
fn validate_rejects_nan_field() {
    let mut bad = sample("X-1", "Steel SAE 1015", "as-rolled");
    bad.su = f64::NAN;
    let err = catalog::validate(&[bad]).expect_err("NaN must be rejected");
    assert_eq!(
        err,
        DataError::NonFinite {
            id: "X-1".to_string(),
            field: "Su"
        }
    );
}

#[test]
fn validate_rejects_nonpositive_density() {
    let mut bad = sample("X-2", "Steel SAE 1015", "as-rolled");
    bad.density = 0.0;
    let err = catalog::validate(&[bad]).expect_err("zero density must be rejected");
    assert!(matches!(err, DataError::NonPositive { field: "Ro", .. }));
}

#[test]
fn validate_rejects_duplicate_ids() {
    let a = sample("X-3", "Steel SAE 1015", "as-rolled");
    let b = sample("x-3", "Steel SAE 1020", "annealed");
    let err = catalog::validate(&[a, b]).expect_err("duplicate ids must be rejected");
    assert!(matches!(err, DataError::DuplicateId { .. }));
}

#[test]
fn filter_matches_name_or_heat_treatment_case_insensitively() {
    let rows = filter::filter(catalog::materials(), "1015", None);
    assert!(!rows.is_empty());
    for m in &rows {
        assert!(
            m.name.contains("1015") || m.heat_treatment.contains("1015"),
            "{} matched without containing 1015",
            m.id
        );
    }
    let upper = filter::filter(catalog::materials(), "ANNEALED", None);
    let lower = filter::filter(catalog::materials(), "annealed", None);
    assert_eq!(upper.len(), lower.len());
    assert!(!upper.is_empty());
}

#[test]
fn empty_search_with_facet_restricts_by_name() {
    let rows = filter::filter(catalog::materials(), "", Some("Steel SAE"));
    assert!(!rows.is_empty());
    for m in &rows {
        assert!(m.name.contains("Steel SAE"));
    }
    let all = filter::filter(catalog::materials(), "", None);
    assert_eq!(all.len(), catalog::materials().len());
}

#[test]
fn filter_preserves_catalog_order() {
    let rows = filter::filter(catalog::materials(), "", None);
    let ids: Vec<&str> = rows.iter().map(|m| m.id).collect();
    let expected: Vec<&str> = catalog::materials().iter().map(|m| m.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn filter_empty_result_is_ok() {
    assert!(filter::filter(catalog::materials(), "unobtainium", None).is_empty());
}

#[test]
fn family_strips_trailing_numeric_grade_only() {
    assert_eq!(filter::family_of("Steel SAE 1015"), "Steel SAE");
    assert_eq!(filter::family_of("Steel ASTM A36"), "Steel ASTM A36");
    assert_eq!(filter::family_of("Inconel"), "Inconel");
}

#[test]
fn families_are_deduplicated_in_first_seen_order() {
    let mats = [
        sample("F-1", "Steel SAE 1015", "as-rolled"),
        sample("F-2", "Steel SAE 1020", "as-rolled"),
        sample("F-3", "Steel ASTM A36", "hot-rolled"),
        sample("F-4", "Steel SAE 1030", "as-rolled"),
    ];
    let fams = filter::families(&mats);
    assert_eq!(fams, vec!["Steel SAE", "Steel ASTM A36"]);
}
