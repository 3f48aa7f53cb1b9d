use pulse_anomaly::AnomalyEngine;
use std::sync::Arc;

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 异常分析引擎
    pub engine: Arc<AnomalyEngine>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(engine: Arc<AnomalyEngine>) -> Self {
        Self { engine }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(AnomalyEngine::new()))
    }
}
