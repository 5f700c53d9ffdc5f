//! 속성 → 시각 매핑 파이프라인 테스트 (색/결정립/변형).

use rand::rngs::StdRng;
use rand::SeedableRng;

use material_viewer::catalog::MaterialRecord;
use material_viewer::visual::{
    color_of, deformation_scale, generate_grains, grain_count, REFERENCE_ELASTIC_MODULUS_MPA,
};

fn base_material() -> MaterialRecord {
    MaterialRecord {
        standard: "ANSI",
        id: "T-1",
        name: "Steel SAE 1040",
        heat_treatment: "as-rolled",
        su: 620.0,
        sy: 415.0,
        a5: 25.0,
        bhn: 201.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    }
}

#[test]
fn color_channels_are_monotone_in_their_property() {
    let mut weaker = base_material();
    let mut stronger = base_material();
    weaker.su = 400.0;
    stronger.su = 900.0;
    assert!(color_of(&stronger).r >= color_of(&weaker).r);

    weaker = base_material();
    stronger = base_material();
    weaker.sy = 250.0;
    stronger.sy = 600.0;
    assert!(color_of(&stronger).g >= color_of(&weaker).g);

    weaker = base_material();
    stronger = base_material();
    weaker.bhn = 120.0;
    stronger.bhn = 300.0;
    assert!(color_of(&stronger).b >= color_of(&weaker).b);
}

#[test]
fn color_clamps_at_one() {
    let mut m = base_material();
    m.su = 1200.0;
    assert_eq!(color_of(&m).r, 1.0);
    m.su = 2500.0;
    m.sy = 900.0;
    m.bhn = 700.0;
    let c = color_of(&m);
    assert_eq!((c.r, c.g, c.b), (1.0, 1.0, 1.0));
}

#[test]
fn color_formula_matches_reference_scales() {
    let m = base_material();
    let c = color_of(&m);
    assert!((c.r - 620.0 / 1200.0).abs() < 1e-12);
    assert!((c.g - 415.0 / 800.0).abs() < 1e-12);
    assert!((c.b - 201.0 / 500.0).abs() < 1e-12);
}

#[test]
fn grain_count_follows_hardness_formula() {
    for (bhn, expected) in [(0.0, 20), (5.0, 21), (100.0, 40), (500.0, 120)] {
        let mut m = base_material();
        m.bhn = bhn;
        assert_eq!(grain_count(&m), expected, "bhn={bhn}");
    }
}

#[test]
fn grain_field_has_36_vertices_per_grain() {
    let m = base_material();
    let mut rng = StdRng::seed_from_u64(7);
    let field = generate_grains(&m, &mut rng);
    assert_eq!(field.grain_count(), grain_count(&m));
    assert_eq!(field.positions.len(), field.grain_count() * 36);
}

#[test]
fn grain_positions_stay_within_jittered_unit_cube() {
    let m = base_material();
    let half = 0.05 + m.su / 10000.0;
    let mut rng = StdRng::seed_from_u64(11);
    let field = generate_grains(&m, &mut rng);
    assert!((field.half_edge - half).abs() < 1e-12);
    for p in &field.positions {
        for c in p {
            assert!(c.abs() <= 1.0 + half + 1e-9, "out of bounds: {c}");
        }
    }
}

#[test]
fn grain_colors_jitter_within_five_percent_of_base() {
    let m = base_material();
    let base = color_of(&m);
    let mut rng = StdRng::seed_from_u64(13);
    let field = generate_grains(&m, &mut rng);
    for c in &field.grain_colors {
        assert!(c.r >= base.r * 0.95 && c.r <= base.r * 1.05);
        assert!(c.g >= base.g * 0.95 && c.g <= base.g * 1.05);
        assert!(c.b >= base.b * 0.95 && c.b <= base.b * 1.05);
    }
}

#[test]
fn same_seed_reproduces_the_same_field() {
    let m = base_material();
    let a = generate_grains(&m, &mut StdRng::seed_from_u64(42));
    let b = generate_grains(&m, &mut StdRng::seed_from_u64(42));
    assert_eq!(a.positions, b.positions);
    let c = generate_grains(&m, &mut StdRng::seed_from_u64(43));
    assert_ne!(a.positions, c.positions);
}

#[test]
fn deformation_is_identity_at_time_zero() {
    let m = base_material();
    assert_eq!(deformation_scale(&m, 0.0), [1.0, 1.0, 1.0]);
}

#[test]
fn deformation_stays_within_twenty_percent() {
    for e in [50000.0, 150000.0, 207000.0, 400000.0] {
        let mut m = base_material();
        m.elastic_modulus = e;
        for step in 0..200 {
            let t = step as f64 * 0.13;
            let [sx, sy, sz] = deformation_scale(&m, t);
            assert!((0.8..=1.2).contains(&sx), "E={e} t={t} sx={sx}");
            assert!((0.8..=1.2).contains(&sy), "E={e} t={t} sy={sy}");
            assert_eq!(sz, 1.0);
        }
    }
}

#[test]
fn stiffer_material_oscillates_less() {
    let mut soft = base_material();
    let mut stiff = base_material();
    soft.elastic_modulus = 100000.0;
    stiff.elastic_modulus = 200000.0;
    let t = 1.3;
    let soft_amp = (deformation_scale(&soft, t)[0] - 1.0).abs();
    let stiff_amp = (deformation_scale(&stiff, t)[0] - 1.0).abs();
    assert!(soft_amp > stiff_amp);
}

#[test]
fn reference_modulus_gives_no_deformation() {
    let mut m = base_material();
    m.elastic_modulus = REFERENCE_ELASTIC_MODULUS_MPA;
    for t in [0.3, 1.0, 4.7] {
        assert_eq!(deformation_scale(&m, t), [1.0, 1.0, 1.0]);
    }
}
