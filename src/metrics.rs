//! 단일 재료에서 유도되는 표시용 성능 지표. 저장 상태가 없다.

use crate::catalog::MaterialRecord;

/// 비강도 (Su/Ro * 1000, Nm/kg). Ro는 카탈로그 불변식상 항상 양수다.
pub fn strength_to_weight(m: &MaterialRecord) -> f64 {
    (m.su / m.density) * 1000.0
}

/// 비강성 (E/Ro * 1000, Nm/kg).
pub fn stiffness_to_weight(m: &MaterialRecord) -> f64 {
    (m.elastic_modulus / m.density) * 1000.0
}

/// 인성 추정치 (Su * A5 / 100, MPa). 면적 기반 근사일 뿐이다.
pub fn toughness_estimate(m: &MaterialRecord) -> f64 {
    (m.su * m.a5) / 100.0
}

/// 연신율 기반 정성적 연성 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ductility {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Ductility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Ductility::High => "High",
            Ductility::Medium => "Medium",
            Ductility::Low => "Low",
        };
        f.write_str(s)
    }
}

/// A5 > 30 → High, 15 < A5 ≤ 30 → Medium, 그 외 → Low.
pub fn ductility(a5: f64) -> Ductility {
    if a5 > 30.0 {
        Ductility::High
    } else if a5 > 15.0 {
        Ductility::Medium
    } else {
        Ductility::Low
    }
}
