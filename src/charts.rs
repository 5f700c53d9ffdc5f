//! 2D 비교 차트 좌표 계산. 픽셀 좌표만 산출하며 그리기는 렌더 표면이 맡는다.

use crate::catalog::{MaterialRecord, Property};

/// 산점도 캔버스 크기와 여백 (픽셀).
#[derive(Debug, Clone, Copy)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

/// 산점도의 점 하나 (픽셀 좌표, 원점 좌상단).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// 속성별 축 범위: 주어진 재료들 전체에서 min*0.9 ~ max*1.1.
fn axis_bounds(materials: &[&MaterialRecord], prop: Property) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for m in materials {
        let v = prop.value(m);
        min = min.min(v);
        max = max.max(v);
    }
    (min * 0.9, max * 1.1)
}

/// 선택한 속성 쌍을 여백만큼 안쪽으로 들어간 직사각형에 선형 매핑한다.
/// y축은 픽셀 좌표계에 맞춰 반전된다.
///
/// 축 범위가 퇴화하면 (모든 값이 같아 분모가 0) 해당 축은 직사각형
/// 중앙에 배치한다. NaN을 그리기 단계로 흘리지 않기 위한 정의된 폴백이다.
pub fn scatter_points(
    materials: &[&MaterialRecord],
    prop_x: Property,
    prop_y: Property,
    geom: &ChartGeometry,
) -> Vec<ScatterPoint> {
    if materials.is_empty() {
        return Vec::new();
    }
    let (min_x, max_x) = axis_bounds(materials, prop_x);
    let (min_y, max_y) = axis_bounds(materials, prop_y);
    let span_x = geom.width - 2.0 * geom.padding;
    let span_y = geom.height - 2.0 * geom.padding;

    materials
        .iter()
        .map(|m| {
            let fx = normalized(prop_x.value(m), min_x, max_x);
            let fy = normalized(prop_y.value(m), min_y, max_y);
            ScatterPoint {
                x: geom.padding + fx * span_x,
                y: geom.height - geom.padding - fy * span_y,
            }
        })
        .collect()
}

/// [min,max] → [0,1] 정규화. 퇴화 범위는 중앙(0.5)으로 보낸다.
fn normalized(v: f64, min: f64, max: f64) -> f64 {
    let denom = max - min;
    if denom.abs() < f64::EPSILON || !denom.is_finite() {
        0.5
    } else {
        (v - min) / denom
    }
}

/// 레이더 축 각도. 6축을 등간격으로 배치하며 0번 축이 각도 0이다.
pub fn radar_axis_angles() -> [f64; 6] {
    let step = std::f64::consts::TAU / Property::RADAR.len() as f64;
    let mut angles = [0.0; 6];
    for (i, a) in angles.iter_mut().enumerate() {
        *a = i as f64 * step;
    }
    angles
}

/// 각 축의 정규화 분모: 주어진 재료들에서의 최대값 * 1.1.
pub fn radar_max_values(materials: &[&MaterialRecord]) -> [f64; 6] {
    let mut maxes = [0.0_f64; 6];
    for (i, prop) in Property::RADAR.iter().enumerate() {
        for m in materials {
            maxes[i] = maxes[i].max(prop.value(m));
        }
        maxes[i] *= 1.1;
    }
    maxes
}

/// 재료 하나의 레이더 다각형 꼭짓점 6개 (축 순서, 픽셀 좌표).
/// 폐합은 렌더 표면이 첫 점으로 되돌려 잇는다.
/// 축 최대값이 0이면 해당 축 반경은 0, 즉 중심에 둔다.
pub fn radar_polygon(
    m: &MaterialRecord,
    maxes: &[f64; 6],
    center: (f64, f64),
    radius: f64,
) -> [(f64, f64); 6] {
    let angles = radar_axis_angles();
    let mut points = [(0.0, 0.0); 6];
    for (i, prop) in Property::RADAR.iter().enumerate() {
        let norm = if maxes[i] > 0.0 {
            prop.value(m) / maxes[i]
        } else {
            0.0
        };
        let r = radius * norm;
        points[i] = (
            center.0 + r * angles[i].cos(),
            center.1 + r * angles[i].sin(),
        );
    }
    points
}

/// 모든 재료의 레이더 다각형을 입력 순서대로 계산한다.
/// 첫 번째 재료(포커스)는 렌더링 시 강조색으로 구분된다.
pub fn radar_polygons(
    materials: &[&MaterialRecord],
    center: (f64, f64),
    radius: f64,
) -> Vec<[(f64, f64); 6]> {
    let maxes = radar_max_values(materials);
    materials
        .iter()
        .map(|m| radar_polygon(m, &maxes, center, radius))
        .collect()
}
