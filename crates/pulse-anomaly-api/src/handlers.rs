use crate::error::ApiError;
use crate::models::{
    BatchItemError, ExplanationRequest, ExplanationResponse, ExplanationSlot,
    RealtimeStreamRequest, RealtimeStreamResponse, RootCauseRequest, RootCauseResponse,
    RootCauseSlot, SummaryRequest, SummaryResponse,
};
use crate::state::AppState;
use axum::{extract::State, Json};
use pulse_anomaly::{validate_metrics, AnomalyError};
use pulse_types::Metrics;
use tracing::warn;

/// anomaly_explanation：逐事件给出严重级别与贡献度排序
///
/// 校验失败的事件在对应槽位上报错误，不中断其余事件的处理。
pub async fn anomaly_explanation(
    State(state): State<AppState>,
    Json(req): Json<ExplanationRequest>,
) -> Result<Json<ExplanationResponse>, ApiError> {
    let mut explanations = Vec::with_capacity(req.events.len());

    for event in &req.events {
        match state.engine.explain(event) {
            Ok(explanation) => explanations.push(ExplanationSlot::ok(explanation)),
            Err(AnomalyError::Validation(msg)) => {
                warn!(event_id = %event.id, error = %msg, "Event failed validation");
                explanations.push(ExplanationSlot::error(&event.id, msg));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(Json(ExplanationResponse { explanations }))
}

/// anomaly_realtime_stream：批次快照按严重级别计数
///
/// 校验失败的记录不计入计数，按批次下标在 `errors` 中上报。
pub async fn anomaly_realtime_stream(
    State(state): State<AppState>,
    Json(req): Json<RealtimeStreamRequest>,
) -> Result<Json<RealtimeStreamResponse>, ApiError> {
    let mut valid: Vec<Metrics> = Vec::with_capacity(req.batch.len());
    let mut errors = Vec::new();

    for (index, metrics) in req.batch.iter().enumerate() {
        match validate_metrics(metrics) {
            Ok(()) => valid.push(metrics.clone()),
            Err(err) => {
                warn!(index, error = %err, "Batch record failed validation");
                errors.push(BatchItemError {
                    index,
                    error: err.to_string(),
                });
            }
        }
    }

    let window = state.engine.aggregate(&valid)?;

    Ok(Json(RealtimeStreamResponse {
        counts: window.counts,
        errors,
    }))
}

/// anomaly_rootcause：逐事件推断根因
pub async fn anomaly_rootcause(
    State(state): State<AppState>,
    Json(req): Json<RootCauseRequest>,
) -> Result<Json<RootCauseResponse>, ApiError> {
    let mut root_causes = Vec::with_capacity(req.events.len());

    for event in &req.events {
        match state.engine.root_cause(event) {
            Ok(root_cause) => root_causes.push(RootCauseSlot::ok(root_cause)),
            Err(AnomalyError::Validation(msg)) => {
                warn!(event_id = %event.id, error = %msg, "Event failed validation");
                root_causes.push(RootCauseSlot::error(&event.id, msg));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(Json(RootCauseResponse { root_causes }))
}

/// anomaly_summary：事件列表的 KPI 摘要
pub async fn anomaly_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let valid: Vec<Metrics> = req
        .events
        .iter()
        .filter(|event| validate_metrics(&event.metrics).is_ok())
        .map(|event| event.metrics.clone())
        .collect();

    let window = state.engine.aggregate(&valid)?;
    let heuristic_critical = valid
        .iter()
        .filter(|metrics| state.engine.is_heuristic_critical(metrics))
        .count();

    Ok(Json(SummaryResponse {
        total: req.events.len(),
        by_severity: window.counts,
        heuristic_critical,
    }))
}
