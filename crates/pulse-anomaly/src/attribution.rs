use pulse_types::{Contribution, Feature, Metrics};
use std::cmp::Ordering;

/// 贡献度平局容差
///
/// 诸如 (58-45)/15 与 (2.8-1.5)/1.5 这类语义上相等的偏差在浮点运算下
/// 相差约 1e-16，必须以容差判等才能让固定优先级的平局裁决生效。
const TIE_EPSILON: f64 = 1e-9;

/// 单个特征的正常运行区间
#[derive(Debug, Clone, Copy)]
struct OperatingBand {
    center: f64,
    scale: f64,
}

/// 特征贡献度归因器
///
/// 贡献度 = max(0, |取值 - 区间中心| / 区间尺度)，即偏离正常运行区间的
/// 归一化幅度。输出覆盖记录中存在的全部特征，按贡献度降序排列，
/// 平局按固定特征优先级裁决，保证输出确定性。
#[derive(Debug, Clone, Default)]
pub struct FeatureAttributor;

impl FeatureAttributor {
    pub fn new() -> Self {
        Self
    }

    /// 计算一条指标记录的贡献度排序
    pub fn attribute(&self, metrics: &Metrics) -> Vec<Contribution> {
        let mut contributions: Vec<Contribution> = metrics
            .present_features()
            .into_iter()
            .map(|(feature, value)| {
                let band = operating_band(feature);
                let deviation = ((value - band.center).abs() / band.scale).max(0.0);
                Contribution::new(feature, deviation)
            })
            .collect();

        contributions.sort_by(compare_contributions);
        contributions
    }

    /// 贡献度最高的特征
    pub fn top_feature(&self, metrics: &Metrics) -> Option<Feature> {
        self.attribute(metrics).first().map(|c| c.feature)
    }
}

/// 各特征的典型运行区间（中心 / 尺度）
fn operating_band(feature: Feature) -> OperatingBand {
    match feature {
        Feature::Temp => OperatingBand {
            center: 45.0,
            scale: 15.0,
        },
        Feature::Current => OperatingBand {
            center: 1.5,
            scale: 1.5,
        },
        Feature::Voltage => OperatingBand {
            center: 3.6,
            scale: 0.3,
        },
        Feature::Vibration => OperatingBand {
            center: 0.3,
            scale: 0.3,
        },
        Feature::Humidity => OperatingBand {
            center: 50.0,
            scale: 25.0,
        },
    }
}

/// 贡献度降序，容差判等后按特征优先级
fn compare_contributions(a: &Contribution, b: &Contribution) -> Ordering {
    if a.contribution > b.contribution + TIE_EPSILON {
        Ordering::Less
    } else if b.contribution > a.contribution + TIE_EPSILON {
        Ordering::Greater
    } else {
        a.feature.priority().cmp(&b.feature.priority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_metrics() -> Metrics {
        Metrics::new(58.0, 2.8)
            .with_voltage(3.2)
            .with_vibration(0.5)
            .with_humidity(65.0)
    }

    #[test]
    fn test_tie_resolved_by_priority() {
        // temp 与 current 的偏差都是 0.8667，属于精确平局，temp 胜出
        let attributor = FeatureAttributor::new();
        let contributions = attributor.attribute(&full_metrics());

        assert_eq!(contributions[0].feature, Feature::Temp);
        assert_eq!(contributions[1].feature, Feature::Current);
        assert!((contributions[0].contribution - 13.0 / 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_covers_all_present_features() {
        let attributor = FeatureAttributor::new();
        let contributions = attributor.attribute(&full_metrics());
        assert_eq!(contributions.len(), 5);

        let partial = Metrics::new(58.0, 2.8);
        assert_eq!(attributor.attribute(&partial).len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let attributor = FeatureAttributor::new();
        let metrics = full_metrics();
        let first = attributor.attribute(&metrics);
        let second = attributor.attribute(&metrics);
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_centered_follows_priority_order() {
        let attributor = FeatureAttributor::new();
        let metrics = Metrics::new(45.0, 1.5)
            .with_voltage(3.6)
            .with_vibration(0.3)
            .with_humidity(50.0);

        let contributions = attributor.attribute(&metrics);
        let features: Vec<Feature> = contributions.iter().map(|c| c.feature).collect();
        assert_eq!(features, Feature::PRIORITY.to_vec());
        assert!(contributions.iter().all(|c| c.contribution == 0.0));
    }

    #[test]
    fn test_contributions_non_negative() {
        let attributor = FeatureAttributor::new();
        let metrics = Metrics::new(10.0, 0.1)
            .with_voltage(3.0)
            .with_vibration(0.0)
            .with_humidity(5.0);
        for c in attributor.attribute(&metrics) {
            assert!(c.contribution >= 0.0);
        }
    }

    #[test]
    fn test_exact_critical_tie() {
        // temp=(65-45)/15 与 current=(3.5-1.5)/1.5 均为 4/3
        let attributor = FeatureAttributor::new();
        let metrics = Metrics::new(65.0, 3.5).with_voltage(3.1);
        assert_eq!(attributor.top_feature(&metrics), Some(Feature::Temp));
    }
}
