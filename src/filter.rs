//! 검색어/패싯 기반 카탈로그 필터링.

use crate::catalog::MaterialRecord;

/// 검색어와 패싯으로 카탈로그를 거른다. 카탈로그 순서를 보존한다.
///
/// 검색어는 name 또는 heat_treatment에 대한 대소문자 무시 부분 일치,
/// 패싯은 name에 대한 부분 일치로 추가 제한한다. 빈 결과도 정상이다.
pub fn filter<'a>(
    materials: &'a [MaterialRecord],
    search_term: &str,
    facet: Option<&str>,
) -> Vec<&'a MaterialRecord> {
    let needle = search_term.to_lowercase();
    materials
        .iter()
        .filter(|m| {
            let matches_search = needle.is_empty()
                || m.name.to_lowercase().contains(&needle)
                || m.heat_treatment.to_lowercase().contains(&needle);
            let matches_facet = facet.map_or(true, |f| m.name.contains(f));
            matches_search && matches_facet
        })
        .collect()
}

/// 재료명에서 패밀리 토큰을 뽑는다.
/// 말미의 공백 구분 숫자 등급을 제거한 나머지가 패밀리이며
/// ("Steel SAE 1015" → "Steel SAE"), 숫자 등급이 없으면 전체 이름이다.
pub fn family_of(name: &str) -> &str {
    match name.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) => {
            head.trim_end()
        }
        _ => name,
    }
}

/// 카탈로그에서 패밀리 목록을 최초 등장 순서로 중복 없이 추출한다.
/// UI는 여기에 암묵적 "All" 패싯을 덧붙여 제공한다.
pub fn families(materials: &[MaterialRecord]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for m in materials {
        let fam = family_of(m.name);
        if !out.contains(&fam) {
            out.push(fam);
        }
    }
    out
}
