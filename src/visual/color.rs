//! 강도/경도 → RGB 매핑.

use crate::catalog::MaterialRecord;

/// [0,1] 범위 RGB. 렌더 표면에서 8비트 색으로 변환해 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// 재료 속성에서 기본 색을 만든다.
/// Su→R, Sy→G, Bhn→B를 각각 1200/800/500 기준으로 정규화하고
/// 상한만 1로 클램프한다 (입력은 음수가 아니라고 가정).
pub fn color_of(m: &MaterialRecord) -> Rgb {
    Rgb {
        r: (m.su / 1200.0).min(1.0),
        g: (m.sy / 800.0).min(1.0),
        b: (m.bhn / 500.0).min(1.0),
    }
}
