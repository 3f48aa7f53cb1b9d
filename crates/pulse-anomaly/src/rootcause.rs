use crate::attribution::FeatureAttributor;
use crate::classifier::SeverityClassifier;
use pulse_types::{Feature, RootCause, SensorEvent, SeverityLevel};
use tracing::warn;

/// 正常运行时的根因结论
pub const NOMINAL_OPERATION: &str = "nominal operation";

/// 固定因果词表：首要特征 → 根因标签
pub fn causal_label(feature: Feature) -> &'static str {
    match feature {
        Feature::Temp => "thermal overload",
        Feature::Current => "electrical overcurrent",
        Feature::Voltage => "power supply instability",
        Feature::Vibration => "mechanical wear or imbalance",
        Feature::Humidity => "environmental exposure",
    }
}

/// 根因映射器
///
/// normal 级别直接给出 nominal operation；否则取归因器排名首位的特征
/// 查因果词表。多个指标同时越限时沿用归因器的平局裁决，从不另设规则，
/// 保证根因与解释结果互相一致。
#[derive(Debug, Clone, Default)]
pub struct RootCauseMapper {
    classifier: SeverityClassifier,
    attributor: FeatureAttributor,
}

impl RootCauseMapper {
    pub fn new() -> Self {
        Self {
            classifier: SeverityClassifier::new(),
            attributor: FeatureAttributor::new(),
        }
    }

    /// 推断一个已校验事件的根因
    pub fn map_cause(&self, event: &SensorEvent) -> RootCause {
        let severity = self.classifier.classify(&event.metrics);
        if severity == SeverityLevel::Normal {
            return RootCause::new(&event.id, NOMINAL_OPERATION);
        }

        match self.attributor.top_feature(&event.metrics) {
            Some(feature) => RootCause::new(&event.id, causal_label(feature)),
            None => {
                // 已校验事件至少含 temp 与 current，不应走到这里
                warn!(event_id = %event.id, "Anomalous event has no attributable features");
                RootCause::new(&event.id, NOMINAL_OPERATION)
            }
        }
    }
}
