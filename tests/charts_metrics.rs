//! 차트 좌표 계산, 파생 지표, 선택 상태 테스트.

use material_viewer::catalog::{MaterialRecord, Property};
use material_viewer::charts::{self, ChartGeometry};
use material_viewer::config::Config;
use material_viewer::metrics::{self, Ductility};
use material_viewer::selection::Selection;

fn mat(id: &'static str, su: f64, sy: f64) -> MaterialRecord {
    MaterialRecord {
        standard: "ANSI",
        id,
        name: "Steel SAE 1020",
        heat_treatment: "as-rolled",
        su,
        sy,
        a5: 30.0,
        bhn: 150.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    }
}

#[test]
fn scatter_maps_known_values_to_expected_pixels() {
    let a = mat("S-1", 500.0, 400.0);
    let b = mat("S-2", 1000.0, 400.0);
    let geom = ChartGeometry {
        width: 500.0,
        height: 300.0,
        padding: 40.0,
    };
    let pts = charts::scatter_points(&[&a, &b], Property::Su, Property::Sy, &geom);

    // X축: 범위 [450, 1100], 내측 폭 420px
    let expected_x1 = 40.0 + (500.0 - 450.0) / 650.0 * 420.0;
    let expected_x2 = 40.0 + (1000.0 - 450.0) / 650.0 * 420.0;
    assert!((pts[0].x - expected_x1).abs() < 1e-9);
    assert!((pts[1].x - expected_x2).abs() < 1e-9);
    // 패딩 안쪽 직사각형을 벗어나지 않는다
    assert!(pts[0].x > 40.0 && pts[1].x < 460.0);

    // Y축: 두 값이 같으므로 정규화 0.5, 픽셀 y는 반전된 중앙
    let expected_y = 300.0 - 40.0 - 0.5 * 220.0;
    assert!((pts[0].y - expected_y).abs() < 1e-9);
    assert!((pts[1].y - expected_y).abs() < 1e-9);
}

#[test]
fn scatter_y_axis_is_inverted() {
    let low = mat("S-3", 600.0, 200.0);
    let high = mat("S-4", 600.0, 800.0);
    let geom = ChartGeometry {
        width: 400.0,
        height: 400.0,
        padding: 40.0,
    };
    let pts = charts::scatter_points(&[&low, &high], Property::Su, Property::Sy, &geom);
    // 데이터가 클수록 픽셀 y는 작아야 한다 (위쪽)
    assert!(pts[1].y < pts[0].y);
}

#[test]
fn scatter_degenerate_axis_maps_to_center() {
    // 양쪽 모두 0이면 min*0.9 == max*1.1 == 0 으로 분모가 0이다.
    let mut a = mat("S-5", 500.0, 300.0);
    let mut b = mat("S-6", 700.0, 350.0);
    a.poisson_ratio = 0.0;
    b.poisson_ratio = 0.0;
    let geom = ChartGeometry {
        width: 500.0,
        height: 300.0,
        padding: 40.0,
    };
    let pts = charts::scatter_points(&[&a, &b], Property::Mu, Property::Sy, &geom);
    for pt in &pts {
        assert!((pt.x - 250.0).abs() < 1e-9, "x={} not centered", pt.x);
        assert!(pt.x.is_finite() && pt.y.is_finite());
    }
}

#[test]
fn scatter_empty_input_yields_no_points() {
    let geom = ChartGeometry {
        width: 500.0,
        height: 300.0,
        padding: 40.0,
    };
    assert!(charts::scatter_points(&[], Property::Su, Property::Sy, &geom).is_empty());
}

#[test]
fn radar_self_comparison_radii_equal_radius_over_one_point_one() {
    let m = mat("R-1", 620.0, 415.0);
    let center = (200.0, 175.0);
    let radius = 140.0;
    let polygons = charts::radar_polygons(&[&m, &m], center, radius);
    assert_eq!(polygons.len(), 2);
    for polygon in &polygons {
        for (x, y) in polygon {
            let r = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
            assert!((r - radius / 1.1).abs() < 1e-9, "r={r}");
        }
    }
}

#[test]
fn radar_axes_are_equally_spaced() {
    let angles = charts::radar_axis_angles();
    let step = std::f64::consts::TAU / 6.0;
    for (i, a) in angles.iter().enumerate() {
        assert!((a - i as f64 * step).abs() < 1e-12);
    }
}

#[test]
fn radar_zero_axis_collapses_to_center() {
    let mut m = mat("R-2", 620.0, 415.0);
    m.a5 = 0.0;
    let center = (100.0, 100.0);
    let polygon = &charts::radar_polygons(&[&m], center, 120.0)[0];
    // A5는 RADAR 축의 세 번째
    let (x, y) = polygon[2];
    assert!((x - center.0).abs() < 1e-9);
    assert!((y - center.1).abs() < 1e-9);
}

#[test]
fn derived_metrics_match_reference_formulas() {
    let mut m = mat("M-1", 1200.0, 900.0);
    m.density = 7850.0;
    m.a5 = 20.0;
    assert!((metrics::strength_to_weight(&m) - (1200.0 / 7850.0) * 1000.0).abs() < 1e-9);
    assert!(
        (metrics::stiffness_to_weight(&m) - (207000.0 / 7850.0) * 1000.0).abs() < 1e-9
    );
    assert!((metrics::toughness_estimate(&m) - 240.0).abs() < 1e-9);
}

#[test]
fn ductility_buckets() {
    assert_eq!(metrics::ductility(35.0), Ductility::High);
    assert_eq!(metrics::ductility(20.0), Ductility::Medium);
    assert_eq!(metrics::ductility(10.0), Ductility::Low);
    // 경계값: 30은 Medium, 15는 Low
    assert_eq!(metrics::ductility(30.0), Ductility::Medium);
    assert_eq!(metrics::ductility(15.0), Ductility::Low);
}

#[test]
fn toggle_comparison_twice_is_a_no_op() {
    let catalog = [mat("C-1", 500.0, 300.0), mat("C-2", 600.0, 350.0)];
    let mut sel = Selection::new(&catalog, &catalog[0]).expect("initial focus");
    assert!(!sel.is_compared(&catalog[1]));
    sel.toggle_comparison(&catalog[1]);
    assert!(sel.is_compared(&catalog[1]));
    sel.toggle_comparison(&catalog[1]);
    assert!(!sel.is_compared(&catalog[1]));
    assert!(sel.comparison().is_empty());
}

#[test]
fn select_of_foreign_record_is_ignored() {
    let catalog = [mat("C-3", 500.0, 300.0), mat("C-4", 600.0, 350.0)];
    let outsider = mat("C-99", 700.0, 400.0);
    let mut sel = Selection::new(&catalog, &catalog[0]).expect("initial focus");
    sel.select(&outsider);
    assert_eq!(sel.focused().id, "C-3");
    sel.toggle_comparison(&outsider);
    assert!(sel.comparison().is_empty());
}

#[test]
fn compared_puts_focus_first_then_insertion_order() {
    let catalog = [
        mat("C-5", 500.0, 300.0),
        mat("C-6", 600.0, 350.0),
        mat("C-7", 700.0, 400.0),
    ];
    let mut sel = Selection::new(&catalog, &catalog[1]).expect("initial focus");
    sel.toggle_comparison(&catalog[2]);
    sel.toggle_comparison(&catalog[0]);
    let ids: Vec<&str> = sel.compared().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["C-6", "C-7", "C-5"]);
}

#[test]
fn selection_rejects_foreign_initial_focus() {
    let catalog = [mat("C-8", 500.0, 300.0)];
    let outsider = mat("C-9", 600.0, 350.0);
    assert!(Selection::new(&catalog, &outsider).is_none());
}

#[test]
fn config_round_trips_through_toml() {
    let mut cfg = Config::default();
    cfg.default_x_property = Property::Bhn;
    cfg.default_y_property = Property::Ro;
    cfg.grain_seed = Some(1234);
    cfg.ui_scale = 1.25;
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("deserialize");
    assert_eq!(back.default_x_property, Property::Bhn);
    assert_eq!(back.default_y_property, Property::Ro);
    assert_eq!(back.grain_seed, Some(1234));
    assert!((back.ui_scale - 1.25).abs() < 1e-6);
}
