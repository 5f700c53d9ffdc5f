//! 속성 → 시각 요소 매핑 파이프라인.
//! 모두 재료 레코드에 대한 순수 함수이며 렌더 표면과 분리되어 있다.

pub mod color;
pub mod deformation;
pub mod grains;

pub use color::{color_of, Rgb};
pub use deformation::{deformation_scale, REFERENCE_ELASTIC_MODULUS_MPA};
pub use grains::{generate_grains, grain_count, GrainField};
