use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 严重级别
///
/// 全序关系：normal < warning < critical（派生 Ord 依赖变体声明顺序）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Normal,
    Warning,
    Critical,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 3] = [
        SeverityLevel::Normal,
        SeverityLevel::Warning,
        SeverityLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Normal => "normal",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 窗口聚合结果：各严重级别的计数
///
/// 三个级别的键始终存在，即使计数为零。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateWindow {
    pub counts: BTreeMap<SeverityLevel, u64>,
}

impl AggregateWindow {
    /// 创建零计数窗口
    pub fn empty() -> Self {
        let counts = SeverityLevel::ALL.iter().map(|&level| (level, 0)).collect();
        Self { counts }
    }

    /// 记录一条已分类的读数
    pub fn record(&mut self, level: SeverityLevel) {
        *self.counts.entry(level).or_insert(0) += 1;
    }

    /// 所有级别计数之和
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl Default for AggregateWindow {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_total_order() {
        assert!(SeverityLevel::Normal < SeverityLevel::Warning);
        assert!(SeverityLevel::Warning < SeverityLevel::Critical);
    }

    #[test]
    fn test_empty_window_has_all_levels() {
        let window = AggregateWindow::empty();
        assert_eq!(window.counts.len(), 3);
        assert_eq!(window.total(), 0);
        for level in SeverityLevel::ALL {
            assert_eq!(window.counts[&level], 0);
        }
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&SeverityLevel::Critical).unwrap();
        assert_eq!(json, r#""critical""#);
    }

    #[test]
    fn test_window_counts_serialize_as_named_keys() {
        let mut window = AggregateWindow::empty();
        window.record(SeverityLevel::Warning);
        let value = serde_json::to_value(&window).unwrap();
        assert_eq!(value["counts"]["warning"], 1);
        assert_eq!(value["counts"]["normal"], 0);
        assert_eq!(value["counts"]["critical"], 0);
    }
}
