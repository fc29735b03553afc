use chrono::{DateTime, Local};

/// 변환 기록 한 건.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub from_value: f64,
    pub from_unit: String,
    pub to_value: f64,
    pub to_unit: String,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    /// 현재 시각으로 기록을 만든다.
    pub fn now(
        from_value: f64,
        from_unit: impl Into<String>,
        to_value: f64,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            from_value,
            from_unit: from_unit.into(),
            to_value,
            to_unit: to_unit.into(),
            timestamp: Local::now(),
        }
    }

    pub fn timestamp_label(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// 세션 단위의 변환 기록. 추가만 가능하며 사용자가 지울 때까지 전체를 보관한다.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// 가장 최근 `limit`건을 오래된 것부터 반환한다.
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
