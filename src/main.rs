use clap::Parser;
use material_viewer::{app, catalog, config, ui_cli};

/// 철강 재료 속성 뷰어 (텍스트 메뉴 인터페이스).
#[derive(Debug, Parser)]
#[command(name = "material_viewer_cli", version)]
struct Cli {
    /// 지정한 ID의 재료 상세만 출력하고 종료한다.
    #[arg(long, value_name = "ID")]
    id: Option<String>,
}

/// 프로그램의 엔트리 포인트. 카탈로그 검증과 설정 로드 후 CLI를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    catalog::validate(catalog::materials())?;

    if let Some(id) = cli.id {
        match catalog::find_material(&id) {
            Some(m) => ui_cli::print_material(m),
            None => eprintln!("해당 ID의 재료가 없습니다: {id}"),
        }
        return Ok(());
    }

    let mut cfg = config::load_or_default()?;
    app::run(&mut cfg)?;
    Ok(())
}
