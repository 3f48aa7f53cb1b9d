use crate::aggregate::WindowAggregator;
use crate::attribution::FeatureAttributor;
use crate::classifier::SeverityClassifier;
use crate::error::Result;
use crate::rootcause::RootCauseMapper;
use crate::validate::validate_event;
use pulse_types::{AggregateWindow, Explanation, Metrics, RootCause, SensorEvent, SeverityLevel};
use tracing::debug;

/// 异常分析引擎
///
/// 组合分类、归因、聚合与根因映射四个纯组件，是请求服务唯一的入口。
/// 无共享可变状态，跨请求不保留任何数据，可安全并发调用。
#[derive(Debug, Clone, Default)]
pub struct AnomalyEngine {
    classifier: SeverityClassifier,
    attributor: FeatureAttributor,
    aggregator: WindowAggregator,
    mapper: RootCauseMapper,
}

impl AnomalyEngine {
    pub fn new() -> Self {
        Self {
            classifier: SeverityClassifier::new(),
            attributor: FeatureAttributor::new(),
            aggregator: WindowAggregator::new(),
            mapper: RootCauseMapper::new(),
        }
    }

    /// 分类单条指标记录
    pub fn classify(&self, metrics: &Metrics) -> SeverityLevel {
        self.classifier.classify(metrics)
    }

    /// 解释单个事件：严重级别 + 贡献度排序
    pub fn explain(&self, event: &SensorEvent) -> Result<Explanation> {
        validate_event(event)?;

        let severity = self.classifier.classify(&event.metrics);
        let contributions = self.attributor.attribute(&event.metrics);
        debug!(event_id = %event.id, severity = %severity, "Event explained");

        Ok(Explanation {
            id: event.id.clone(),
            severity,
            contributions,
        })
    }

    /// 聚合一批已校验的指标记录
    pub fn aggregate(&self, batch: &[Metrics]) -> Result<AggregateWindow> {
        self.aggregator.aggregate(batch)
    }

    /// 推断单个事件的根因
    pub fn root_cause(&self, event: &SensorEvent) -> Result<RootCause> {
        validate_event(event)?;
        Ok(self.mapper.map_cause(event))
    }

    /// 仪表盘 KPI 启发式判定
    pub fn is_heuristic_critical(&self, metrics: &Metrics) -> bool {
        self.classifier.is_heuristic_critical(metrics)
    }
}
