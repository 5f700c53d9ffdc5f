use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::{self, MaterialRecord, Property};
use crate::config::Config;
use crate::filter;
use crate::metrics;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListMaterials,
    MaterialDetail,
    CompareMetrics,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Material Properties Viewer ===");
    println!("1) 재료 목록/검색");
    println!("2) 재료 상세");
    println!("3) 성능 지표 비교");
    println!("4) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ListMaterials),
            "2" => return Ok(MenuChoice::MaterialDetail),
            "3" => return Ok(MenuChoice::CompareMetrics),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 재료 목록/검색 메뉴를 처리한다.
pub fn handle_list_materials() -> Result<(), AppError> {
    println!("\n-- 재료 목록/검색 --");
    let term = read_line("검색어 (이름/열처리, 전체는 엔터): ")?;
    let term = term.trim();

    let fams = filter::families(catalog::materials());
    println!("패밀리: 0) All");
    for (i, fam) in fams.iter().enumerate() {
        println!("패밀리: {}) {fam}", i + 1);
    }
    let facet_sel = read_line("패밀리 번호(전체는 엔터 또는 0): ")?;
    let facet = facet_sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| fams.get(i).copied());

    let rows = filter::filter(catalog::materials(), term, facet);
    if rows.is_empty() {
        println!("일치하는 재료가 없습니다.");
        return Ok(());
    }
    println!(
        "{:<10} {:<22} {:<22} {:>7} {:>7} {:>6}",
        "ID", "Material", "Heat treatment", "Su", "Sy", "Bhn"
    );
    for m in rows {
        println!(
            "{:<10} {:<22} {:<22} {:>7.0} {:>7.0} {:>6.0}",
            m.id, m.name, m.heat_treatment, m.su, m.sy, m.bhn
        );
    }
    Ok(())
}

/// 재료 상세 메뉴를 처리한다.
pub fn handle_material_detail() -> Result<(), AppError> {
    println!("\n-- 재료 상세 --");
    let id = read_line("재료 ID: ")?;
    match catalog::find_material(id.trim()) {
        Some(m) => print_material(m),
        None => println!("해당 ID의 재료가 없습니다: {}", id.trim()),
    }
    Ok(())
}

/// 성능 지표 비교 메뉴를 처리한다.
pub fn handle_compare_metrics() -> Result<(), AppError> {
    println!("\n-- 성능 지표 비교 --");
    let ids = read_line("재료 ID 목록 (쉼표 구분): ")?;
    let mut selected: Vec<&'static MaterialRecord> = Vec::new();
    for token in ids.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match catalog::find_material(token) {
            Some(m) => selected.push(m),
            None => println!("무시: 알 수 없는 ID {token}"),
        }
    }
    if selected.is_empty() {
        println!("비교할 재료가 없습니다.");
        return Ok(());
    }
    println!(
        "{:<10} {:>14} {:>14} {:>12} {:>10}",
        "ID", "Su/Ro [Nm/kg]", "E/Ro [Nm/kg]", "Tough [MPa]", "Ductility"
    );
    for m in selected {
        println!(
            "{:<10} {:>14.2} {:>14.2} {:>12.2} {:>10}",
            m.id,
            metrics::strength_to_weight(m),
            metrics::stiffness_to_weight(m),
            metrics::toughness_estimate(m),
            metrics::ductility(m.a5)
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재 산점도 축: X={} Y={}",
        cfg.default_x_property.symbol(),
        cfg.default_y_property.symbol()
    );
    for (i, p) in Property::ALL.iter().enumerate() {
        print!("{}) {}  ", i + 1, p.symbol());
    }
    println!();
    let sel = read_line("X축 번호(유지하려면 엔터): ")?;
    if let Some(p) = parse_property(sel.trim()) {
        cfg.default_x_property = p;
    }
    let sel = read_line("Y축 번호(유지하려면 엔터): ")?;
    if let Some(p) = parse_property(sel.trim()) {
        cfg.default_y_property = p;
    }
    let sel = read_line("결정립 시드 (해제는 0, 유지하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "0" => cfg.grain_seed = None,
        s => match s.parse::<u64>() {
            Ok(seed) => cfg.grain_seed = Some(seed),
            Err(_) => println!("잘못된 입력이므로 변경하지 않습니다."),
        },
    }
    println!(
        "산점도 축이 X={} Y={} 로 설정되었습니다.",
        cfg.default_x_property.symbol(),
        cfg.default_y_property.symbol()
    );
    Ok(())
}

fn parse_property(s: &str) -> Option<Property> {
    let n = s.parse::<usize>().ok()?;
    Property::ALL.get(n.checked_sub(1)?).copied()
}

/// 재료 한 건의 전체 속성/지표 표를 출력한다.
pub fn print_material(m: &MaterialRecord) {
    println!("\n{} ({})", m.name, m.heat_treatment);
    println!("규격: {}  ID: {}", m.standard, m.id);
    if let Some(desc) = m.description {
        println!("설명: {desc}");
    }
    println!("-- Mechanical --");
    println!("Su  인장강도: {:.0} MPa", m.su);
    println!("Sy  항복강도: {:.0} MPa", m.sy);
    println!("A5  연신율: {:.1} %", m.a5);
    println!("Bhn 경도: {:.0}", m.bhn);
    println!("E   탄성계수: {:.0} MPa", m.elastic_modulus);
    println!("G   전단탄성계수: {:.0} MPa", m.shear_modulus);
    println!("-- Physical --");
    println!("Ro  밀도: {:.0} kg/m3", m.density);
    println!("mu  포아송비: {:.2}", m.poisson_ratio);
    if let Some(ph) = m.ph {
        println!("pH: {ph:.1}");
    }
    println!("-- Performance --");
    println!(
        "비강도: {:.2} Nm/kg",
        metrics::strength_to_weight(m)
    );
    println!(
        "비강성: {:.2} Nm/kg",
        metrics::stiffness_to_weight(m)
    );
    println!("인성(추정): {:.2} MPa", metrics::toughness_estimate(m));
    println!("연성: {}", metrics::ductility(m.a5));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
