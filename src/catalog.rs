//! 철강 재료 카탈로그. 정적 테이블과 속성 접근자를 제공한다.
//! 값은 참고용 대표치이며 설계 시 최신 규격(SAE/ASTM 등)으로 검증해야 한다.

use serde::{Deserialize, Serialize};

/// 재료 한 건의 기계적/물리적 속성 전체.
///
/// 강도/탄성 계수는 MPa, 밀도는 kg/m³, 연신율은 % 단위다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialRecord {
    pub standard: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub heat_treatment: &'static str,
    /// 인장강도 Su (MPa)
    pub su: f64,
    /// 항복강도 Sy (MPa)
    pub sy: f64,
    /// 연신율 A5 (%)
    pub a5: f64,
    /// 브리넬 경도 Bhn
    pub bhn: f64,
    /// 탄성계수 E (MPa)
    pub elastic_modulus: f64,
    /// 전단탄성계수 G (MPa)
    pub shear_modulus: f64,
    /// 포아송비 mu
    pub poisson_ratio: f64,
    /// 밀도 Ro (kg/m³)
    pub density: f64,
    pub ph: Option<f64>,
    pub description: Option<&'static str>,
}

/// 차트 축·레이더 축에서 선택 가능한 속성 키.
/// 문자열 키 대신 열거형으로 고정해 누락 없이 매칭한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Property {
    Su,
    Sy,
    A5,
    Bhn,
    E,
    G,
    Mu,
    Ro,
}

impl Property {
    /// 선택 가능한 전체 속성 목록 (차트 축 콤보 순서).
    pub const ALL: [Property; 8] = [
        Property::Su,
        Property::Sy,
        Property::A5,
        Property::Bhn,
        Property::E,
        Property::G,
        Property::Mu,
        Property::Ro,
    ];

    /// 레이더 차트 고정 6축 순서.
    pub const RADAR: [Property; 6] = [
        Property::Su,
        Property::Sy,
        Property::A5,
        Property::Bhn,
        Property::E,
        Property::G,
    ];

    pub fn value(self, m: &MaterialRecord) -> f64 {
        match self {
            Property::Su => m.su,
            Property::Sy => m.sy,
            Property::A5 => m.a5,
            Property::Bhn => m.bhn,
            Property::E => m.elastic_modulus,
            Property::G => m.shear_modulus,
            Property::Mu => m.poisson_ratio,
            Property::Ro => m.density,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Property::Su => "Su",
            Property::Sy => "Sy",
            Property::A5 => "A5",
            Property::Bhn => "Bhn",
            Property::E => "E",
            Property::G => "G",
            Property::Mu => "mu",
            Property::Ro => "Ro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Property::Su => "Ultimate Tensile Strength",
            Property::Sy => "Yield Strength",
            Property::A5 => "Elongation",
            Property::Bhn => "Hardness",
            Property::E => "Elastic Modulus",
            Property::G => "Shear Modulus",
            Property::Mu => "Poisson's Ratio",
            Property::Ro => "Density",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Property::Su | Property::Sy | Property::E | Property::G => "MPa",
            Property::A5 => "%",
            Property::Bhn | Property::Mu => "",
            Property::Ro => "kg/m3",
        }
    }
}

/// 카탈로그 검증 단계에서 발견되는 데이터 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// 필수 수치 필드가 NaN/무한대
    NonFinite { id: String, field: &'static str },
    /// 양수여야 하는 필드가 0 이하
    NonPositive { id: String, field: &'static str },
    /// 음수가 허용되지 않는 필드가 음수
    Negative { id: String, field: &'static str },
    /// id 중복
    DuplicateId { id: String },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NonFinite { id, field } => {
                write!(f, "재료 {id}: 필드 {field}가 유한한 수치가 아님")
            }
            DataError::NonPositive { id, field } => {
                write!(f, "재료 {id}: 필드 {field}는 양수여야 함")
            }
            DataError::Negative { id, field } => {
                write!(f, "재료 {id}: 필드 {field}는 음수가 될 수 없음")
            }
            DataError::DuplicateId { id } => write!(f, "재료 id 중복: {id}"),
        }
    }
}

impl std::error::Error for DataError {}

/// 내장 카탈로그 전체를 반환한다.
pub fn materials() -> &'static [MaterialRecord] {
    MATERIALS
}

/// id로 재료를 찾는다. 대소문자는 무시한다.
pub fn find_material(id: &str) -> Option<&'static MaterialRecord> {
    MATERIALS.iter().find(|m| m.id.eq_ignore_ascii_case(id))
}

/// 카탈로그를 일괄 검증한다. NaN이 캔버스까지 흘러가는 것을
/// 기동 시점에 차단하기 위한 것으로, 두 바이너리 모두 시작 시 호출한다.
pub fn validate(materials: &[MaterialRecord]) -> Result<(), DataError> {
    let mut seen: Vec<&str> = Vec::with_capacity(materials.len());
    for m in materials {
        if seen.iter().any(|id| id.eq_ignore_ascii_case(m.id)) {
            return Err(DataError::DuplicateId { id: m.id.to_string() });
        }
        seen.push(m.id);

        let required = [
            ("Su", m.su),
            ("Sy", m.sy),
            ("A5", m.a5),
            ("Bhn", m.bhn),
            ("E", m.elastic_modulus),
            ("G", m.shear_modulus),
            ("mu", m.poisson_ratio),
            ("Ro", m.density),
        ];
        for (field, v) in required {
            if !v.is_finite() {
                return Err(DataError::NonFinite { id: m.id.to_string(), field });
            }
        }
        for (field, v) in [("Su", m.su), ("Sy", m.sy), ("A5", m.a5), ("mu", m.poisson_ratio)] {
            if v < 0.0 {
                return Err(DataError::Negative { id: m.id.to_string(), field });
            }
        }
        for (field, v) in [
            ("Bhn", m.bhn),
            ("E", m.elastic_modulus),
            ("G", m.shear_modulus),
            ("Ro", m.density),
        ] {
            if v <= 0.0 {
                return Err(DataError::NonPositive { id: m.id.to_string(), field });
            }
        }
    }
    Ok(())
}

const MATERIALS: &[MaterialRecord] = &[
    MaterialRecord {
        standard: "ANSI",
        id: "1015-AR",
        name: "Steel SAE 1015",
        heat_treatment: "as-rolled",
        su: 420.0,
        sy: 315.0,
        a5: 39.0,
        bhn: 126.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: Some("Low-carbon steel, good formability"),
    },
    MaterialRecord {
        standard: "ANSI",
        id: "1015-N",
        name: "Steel SAE 1015",
        heat_treatment: "normalized at 925 C",
        su: 425.0,
        sy: 325.0,
        a5: 37.0,
        bhn: 121.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    },
    MaterialRecord {
        standard: "ANSI",
        id: "1015-A",
        name: "Steel SAE 1015",
        heat_treatment: "annealed at 870 C",
        su: 385.0,
        sy: 285.0,
        a5: 37.0,
        bhn: 111.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    },
    MaterialRecord {
        standard: "ANSI",
        id: "1020-AR",
        name: "Steel SAE 1020",
        heat_treatment: "as-rolled",
        su: 450.0,
        sy: 330.0,
        a5: 36.0,
        bhn: 143.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: Some("General purpose structural grade"),
    },
    MaterialRecord {
        standard: "ANSI",
        id: "1020-N",
        name: "Steel SAE 1020",
        heat_treatment: "normalized at 870 C",
        su: 440.0,
        sy: 345.0,
        a5: 35.8,
        bhn: 131.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    },
    MaterialRecord {
        standard: "ANSI",
        id: "1030-AR",
        name: "Steel SAE 1030",
        heat_treatment: "as-rolled",
        su: 550.0,
        sy: 345.0,
        a5: 32.0,
        bhn: 179.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    },
    MaterialRecord {
        standard: "ANSI",
        id: "1040-AR",
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
        description: Some("Medium-carbon, shafts and couplings"),
    },
    MaterialRecord {
        standard: "ANSI",
        id: "1050-AR",
        name: "Steel SAE 1050",
        heat_treatment: "as-rolled",
        su: 725.0,
        sy: 415.0,
        a5: 20.0,
        bhn: 229.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    },
    MaterialRecord {
        standard: "ANSI",
        id: "1095-HR",
        name: "Steel SAE 1095",
        heat_treatment: "hot-rolled",
        su: 965.0,
        sy: 570.0,
        a5: 9.0,
        bhn: 293.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: Some("High-carbon spring steel"),
    },
    MaterialRecord {
        standard: "ANSI",
        id: "3140-A",
        name: "Steel SAE 3140",
        heat_treatment: "annealed at 815 C",
        su: 690.0,
        sy: 420.0,
        a5: 24.5,
        bhn: 197.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    },
    MaterialRecord {
        standard: "ANSI",
        id: "4130-A",
        name: "Steel SAE 4130",
        heat_treatment: "annealed at 865 C",
        su: 560.0,
        sy: 360.0,
        a5: 28.0,
        bhn: 156.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: Some("Cr-Mo alloy, aircraft tubing"),
    },
    MaterialRecord {
        standard: "ANSI",
        id: "4140-A",
        name: "Steel SAE 4140",
        heat_treatment: "annealed at 815 C",
        su: 655.0,
        sy: 415.0,
        a5: 25.7,
        bhn: 197.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: None,
    },
    MaterialRecord {
        standard: "ANSI",
        id: "4340-A",
        name: "Steel SAE 4340",
        heat_treatment: "annealed at 810 C",
        su: 745.0,
        sy: 470.0,
        a5: 22.0,
        bhn: 217.0,
        elastic_modulus: 207000.0,
        shear_modulus: 79000.0,
        poisson_ratio: 0.3,
        density: 7860.0,
        ph: None,
        description: Some("Ni-Cr-Mo alloy, high-strength parts"),
    },
    MaterialRecord {
        standard: "ASTM",
        id: "A36-HR",
        name: "Steel ASTM A36",
        heat_treatment: "hot-rolled",
        su: 400.0,
        sy: 250.0,
        a5: 23.0,
        bhn: 119.0,
        elastic_modulus: 200000.0,
        shear_modulus: 79300.0,
        poisson_ratio: 0.26,
        density: 7850.0,
        ph: None,
        description: Some("Common structural plate steel"),
    },
];

// NOTE:
// - Values are nominal handbook figures for representative conditions; they are
//   for visualization only, not for design calculations.
// - E/G/mu/Ro are shared family constants for carbon and low-alloy grades.
