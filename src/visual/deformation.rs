//! 응력 시각화용 주기 변형 변환. 실제 물리 해석이 아닌 장식용 근사다.

use crate::catalog::MaterialRecord;

/// 기준 강재 탄성계수 (MPa). 정규화의 암묵 기준선이다.
pub const REFERENCE_ELASTIC_MODULUS_MPA: f64 = 207000.0;

/// 경과 시간에 따른 스케일 (x, y, z)를 돌려준다.
///
/// d = sin(t) * (1 - E/207000) * 0.2 이므로 성분은 [0.8, 1.2] 안에 있고,
/// t=0에서는 정확히 (1, 1, 1)이다. 강성이 높을수록 진폭이 작다.
pub fn deformation_scale(m: &MaterialRecord, elapsed_secs: f64) -> [f64; 3] {
    let elasticity_norm = m.elastic_modulus / REFERENCE_ELASTIC_MODULUS_MPA;
    let d = elapsed_secs.sin() * (1.0 - elasticity_norm) * 0.2;
    [1.0 + d, 1.0 - d, 1.0]
}
