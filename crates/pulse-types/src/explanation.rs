use crate::metrics::Feature;
use crate::severity::SeverityLevel;
use serde::{Deserialize, Serialize};

/// 单个特征的贡献度
///
/// 贡献度为非负实数，表示该特征偏离正常运行区间的归一化幅度。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: Feature,
    pub contribution: f64,
}

impl Contribution {
    pub fn new(feature: Feature, contribution: f64) -> Self {
        Self {
            feature,
            contribution,
        }
    }
}

/// 单个事件的分类解释
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub id: String,
    pub severity: SeverityLevel,
    /// 按贡献度降序排列，平局按固定特征优先级
    pub contributions: Vec<Contribution>,
}

/// 单个事件的根因结论
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootCause {
    pub id: String,
    pub cause: String,
}

impl RootCause {
    pub fn new(id: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cause: cause.into(),
        }
    }
}
