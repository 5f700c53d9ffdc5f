//! 포커스 재료와 비교 집합을 관리하는 선택 상태.
//! 카탈로그에 대한 참조만 보유하며 레코드 내용을 복사/변경하지 않는다.

use crate::catalog::MaterialRecord;

/// 단일 포커스 재료 + 비교 집합. 유일한 가변 상태 허브다.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    catalog: &'a [MaterialRecord],
    focused: &'a MaterialRecord,
    comparison: Vec<&'a MaterialRecord>,
}

impl<'a> Selection<'a> {
    /// 초기 포커스를 명시해 생성한다. 초기값이 카탈로그 밖이면 None.
    pub fn new(catalog: &'a [MaterialRecord], initial: &'a MaterialRecord) -> Option<Self> {
        if !contains(catalog, initial) {
            return None;
        }
        Some(Self {
            catalog,
            focused: initial,
            comparison: Vec::new(),
        })
    }

    pub fn focused(&self) -> &'a MaterialRecord {
        self.focused
    }

    pub fn comparison(&self) -> &[&'a MaterialRecord] {
        &self.comparison
    }

    /// 포커스를 교체한다. 카탈로그 밖 레코드면 아무것도 하지 않는다.
    pub fn select(&mut self, record: &'a MaterialRecord) {
        if contains(self.catalog, record) {
            self.focused = record;
        }
    }

    /// 같은 id가 비교 집합에 있으면 제거, 없으면 추가한다.
    /// 두 번 연속 호출하면 이전 상태로 돌아간다.
    pub fn toggle_comparison(&mut self, record: &'a MaterialRecord) {
        if !contains(self.catalog, record) {
            return;
        }
        if let Some(pos) = self
            .comparison
            .iter()
            .position(|m| m.id.eq_ignore_ascii_case(record.id))
        {
            self.comparison.remove(pos);
        } else {
            self.comparison.push(record);
        }
    }

    pub fn is_compared(&self, record: &MaterialRecord) -> bool {
        self.comparison
            .iter()
            .any(|m| m.id.eq_ignore_ascii_case(record.id))
    }

    /// 차트에 넘길 시퀀스: 포커스 재료가 항상 첫 번째, 이후 추가 순서대로.
    pub fn compared(&self) -> Vec<&'a MaterialRecord> {
        let mut out = Vec::with_capacity(self.comparison.len() + 1);
        out.push(self.focused);
        for m in &self.comparison {
            if !m.id.eq_ignore_ascii_case(self.focused.id) {
                out.push(m);
            }
        }
        out
    }
}

fn contains(catalog: &[MaterialRecord], record: &MaterialRecord) -> bool {
    catalog.iter().any(|m| m.id.eq_ignore_ascii_case(record.id))
}
