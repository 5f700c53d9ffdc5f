//! 결정립(grain) 필드 기하 생성. 밀도·입자 크기가 경도/강도에 단조로
//! 비례하는 시각적 근사일 뿐, 금속학적으로 정확한 모델이 아니다.

use rand::Rng;

use crate::catalog::MaterialRecord;
use crate::visual::color::{color_of, Rgb};

/// 결정립당 정점 수: 6면 × 삼각형 2개 × 정점 3개.
pub const VERTICES_PER_GRAIN: usize = 36;

/// 단위 정육면체 코너 부호, 삼각형 리스트 순서
/// (front, back, top, bottom, right, left).
const CUBE_CORNERS: [[f64; 3]; VERTICES_PER_GRAIN] = [
    // front (z+)
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    // back (z-)
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    // top (y+)
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    // bottom (y-)
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    // right (x+)
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    // left (x-)
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// 생성된 결정립 필드. 정점은 삼각형 리스트이며 결정립당 36개,
/// 색은 결정립당 하나다.
#[derive(Debug, Clone)]
pub struct GrainField {
    pub positions: Vec<[f64; 3]>,
    pub grain_colors: Vec<Rgb>,
    pub half_edge: f64,
}

impl GrainField {
    pub fn grain_count(&self) -> usize {
        self.grain_colors.len()
    }
}

/// 결정립 개수: floor(Bhn/5) + 20.
pub fn grain_count(m: &MaterialRecord) -> usize {
    (m.bhn / 5.0).floor() as usize + 20
}

/// 재료로부터 결정립 필드를 생성한다.
///
/// 중심은 [-1,1]³ 균등분포, 반변 길이는 0.05 + Su/10000,
/// 결정립 색은 기본색에 채널별 독립 ±5% 지터를 준다.
/// 난수원을 주입받으므로 같은 시드면 같은 필드가 나온다.
pub fn generate_grains(m: &MaterialRecord, rng: &mut impl Rng) -> GrainField {
    let count = grain_count(m);
    let half_edge = 0.05 + m.su / 10000.0;
    let base = color_of(m);

    let mut positions = Vec::with_capacity(count * VERTICES_PER_GRAIN);
    let mut grain_colors = Vec::with_capacity(count);

    for _ in 0..count {
        let cx = rng.gen::<f64>() * 2.0 - 1.0;
        let cy = rng.gen::<f64>() * 2.0 - 1.0;
        let cz = rng.gen::<f64>() * 2.0 - 1.0;
        for corner in CUBE_CORNERS {
            positions.push([
                cx + corner[0] * half_edge,
                cy + corner[1] * half_edge,
                cz + corner[2] * half_edge,
            ]);
        }
        // 채널별 독립 ±5% 지터
        grain_colors.push(Rgb {
            r: base.r * (1.0 + (rng.gen::<f64>() - 0.5) * 0.1),
            g: base.g * (1.0 + (rng.gen::<f64>() - 0.5) * 0.1),
            b: base.b * (1.0 + (rng.gen::<f64>() - 0.5) * 0.1),
        });
    }

    GrainField {
        positions,
        grain_colors,
        half_edge,
    }
}
