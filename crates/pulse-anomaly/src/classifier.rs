use pulse_types::{Metrics, SeverityLevel};

/// 严重级别分类器
///
/// 按固定顺序评估阈值规则，首个命中者生效：
/// 1. critical：temp > 60 或 current > 3
/// 2. warning：temp > 50 或 current > 2
/// 3. 否则 normal
///
/// 规则对 temp 与 current 单调：抬高任一指标只会维持或提升级别。
/// 调用方负责先校验指标存在性；缺失的门控指标按 0 处理（即 normal）。
#[derive(Debug, Clone)]
pub struct SeverityClassifier {
    critical_temp: f64,
    critical_current: f64,
    warning_temp: f64,
    warning_current: f64,
    heuristic_temp: f64,
    heuristic_current: f64,
}

impl SeverityClassifier {
    pub fn new() -> Self {
        Self {
            critical_temp: 60.0,
            critical_current: 3.0,
            warning_temp: 50.0,
            warning_current: 2.0,
            heuristic_temp: 55.0,
            heuristic_current: 2.0,
        }
    }

    /// 分类一条指标记录
    pub fn classify(&self, metrics: &Metrics) -> SeverityLevel {
        let temp = metrics.temp.unwrap_or(0.0);
        let current = metrics.current.unwrap_or(0.0);

        if temp > self.critical_temp || current > self.critical_current {
            SeverityLevel::Critical
        } else if temp > self.warning_temp || current > self.warning_current {
            SeverityLevel::Warning
        } else {
            SeverityLevel::Normal
        }
    }

    /// 仪表盘 KPI 启发式：temp 与 current 同时偏高
    pub fn is_heuristic_critical(&self, metrics: &Metrics) -> bool {
        metrics.temp.unwrap_or(0.0) > self.heuristic_temp
            && metrics.current.unwrap_or(0.0) > self.heuristic_current
    }
}

impl Default for SeverityClassifier {
    fn default() -> Self {
        Self::new()
    }
}
