use crate::catalog::DataError;
use crate::config::Config;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 카탈로그 데이터 오류
    Data(DataError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Data(e) => write!(f, "데이터 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<DataError> for AppError {
    fn from(value: DataError) -> Self {
        AppError::Data(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::ListMaterials => ui_cli::handle_list_materials()?,
            MenuChoice::MaterialDetail => ui_cli::handle_material_detail()?,
            MenuChoice::CompareMetrics => ui_cli::handle_compare_metrics()?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
