use pulse_types::{Contribution, Explanation, Metrics, RootCause, SensorEvent, SeverityLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 解释请求
#[derive(Debug, Deserialize)]
pub struct ExplanationRequest {
    pub events: Vec<SensorEvent>,
}

/// 解释响应
#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub explanations: Vec<ExplanationSlot>,
}

/// 解释结果槽位：每个输入事件占一个，顺序与输入一致
///
/// 校验失败的事件只携带 `id` 与 `error`，结果字段省略。
#[derive(Debug, Serialize)]
pub struct ExplanationSlot {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLevel>,
    /// 仪表盘兼容字段名
    #[serde(
        rename = "shap_like_contributions",
        skip_serializing_if = "Option::is_none"
    )]
    pub contributions: Option<Vec<Contribution>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExplanationSlot {
    pub fn ok(explanation: Explanation) -> Self {
        Self {
            id: explanation.id,
            severity: Some(explanation.severity),
            contributions: Some(explanation.contributions),
            error: None,
        }
    }

    pub fn error(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            severity: None,
            contributions: None,
            error: Some(error.into()),
        }
    }
}

/// 实时窗口聚合请求
#[derive(Debug, Deserialize)]
pub struct RealtimeStreamRequest {
    pub batch: Vec<Metrics>,
}

/// 实时窗口聚合响应
#[derive(Debug, Serialize)]
pub struct RealtimeStreamResponse {
    pub counts: BTreeMap<SeverityLevel, u64>,
    /// 校验失败的记录，按批次下标上报；为空时不出现在响应中
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BatchItemError>,
}

/// 批次内单条记录的校验错误
#[derive(Debug, Serialize)]
pub struct BatchItemError {
    pub index: usize,
    pub error: String,
}

/// 根因请求
#[derive(Debug, Deserialize)]
pub struct RootCauseRequest {
    pub events: Vec<SensorEvent>,
}

/// 根因响应
#[derive(Debug, Serialize)]
pub struct RootCauseResponse {
    pub root_causes: Vec<RootCauseSlot>,
}

/// 根因结果槽位
#[derive(Debug, Serialize)]
pub struct RootCauseSlot {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RootCauseSlot {
    pub fn ok(root_cause: RootCause) -> Self {
        Self {
            id: root_cause.id,
            cause: Some(root_cause.cause),
            error: None,
        }
    }

    pub fn error(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cause: None,
            error: Some(error.into()),
        }
    }
}

/// KPI 摘要请求
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub events: Vec<SensorEvent>,
}

/// KPI 摘要响应
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// 输入事件总数（含校验失败者）
    pub total: usize,
    /// 有效事件的严重级别计数
    pub by_severity: BTreeMap<SeverityLevel, u64>,
    /// 同时满足 temp > 55 与 current > 2 启发式的有效事件数
    pub heuristic_critical: usize,
}
