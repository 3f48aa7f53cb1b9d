use serde::{Deserialize, Serialize};
use std::fmt;

/// 传感器特征
///
/// 固定优先级顺序（用于贡献度排序的平局裁决）：
/// temp > current > voltage > vibration > humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Temp,
    Voltage,
    Current,
    Vibration,
    Humidity,
}

impl Feature {
    /// 按平局裁决优先级排列的全部特征
    pub const PRIORITY: [Feature; 5] = [
        Feature::Temp,
        Feature::Current,
        Feature::Voltage,
        Feature::Vibration,
        Feature::Humidity,
    ];

    /// 平局裁决优先级（越小越优先）
    pub fn priority(&self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|f| f == self)
            .unwrap_or(Self::PRIORITY.len())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Temp => "temp",
            Feature::Voltage => "voltage",
            Feature::Current => "current",
            Feature::Vibration => "vibration",
            Feature::Humidity => "humidity",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 传感器读数记录
///
/// 所有字段在线上格式中均可缺省，由校验层决定哪些字段是必需的，
/// 这样单条记录缺字段不会导致整个请求反序列化失败。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// 温度（摄氏度）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,

    /// 电压（伏特）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,

    /// 电流（安培）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,

    /// 振动幅度（无量纲）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibration: Option<f64>,

    /// 湿度（百分比）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl Metrics {
    pub fn new(temp: f64, current: f64) -> Self {
        Self {
            temp: Some(temp),
            current: Some(current),
            ..Default::default()
        }
    }

    pub fn with_voltage(mut self, voltage: f64) -> Self {
        self.voltage = Some(voltage);
        self
    }

    pub fn with_vibration(mut self, vibration: f64) -> Self {
        self.vibration = Some(vibration);
        self
    }

    pub fn with_humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// 读取单个特征的取值
    pub fn get(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Temp => self.temp,
            Feature::Voltage => self.voltage,
            Feature::Current => self.current,
            Feature::Vibration => self.vibration,
            Feature::Humidity => self.humidity,
        }
    }

    /// 按优先级顺序列出所有存在取值的特征
    pub fn present_features(&self) -> Vec<(Feature, f64)> {
        Feature::PRIORITY
            .iter()
            .filter_map(|&feature| self.get(feature).map(|value| (feature, value)))
            .collect()
    }
}

/// 传感器事件
///
/// `id` 由调用方提供，作为解释结果与根因结果回关联到事件的键。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub metrics: Metrics,
}

impl SensorEvent {
    pub fn new(id: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            id: id.into(),
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_priority_order() {
        assert_eq!(Feature::Temp.priority(), 0);
        assert_eq!(Feature::Current.priority(), 1);
        assert_eq!(Feature::Voltage.priority(), 2);
        assert_eq!(Feature::Vibration.priority(), 3);
        assert_eq!(Feature::Humidity.priority(), 4);
    }

    #[test]
    fn test_present_features_skips_missing() {
        let metrics = Metrics::new(58.0, 2.8).with_humidity(65.0);
        let features: Vec<Feature> = metrics
            .present_features()
            .into_iter()
            .map(|(f, _)| f)
            .collect();
        assert_eq!(
            features,
            vec![Feature::Temp, Feature::Current, Feature::Humidity]
        );
    }

    #[test]
    fn test_metrics_deserializes_with_missing_fields() {
        let metrics: Metrics = serde_json::from_str(r#"{"temp": 58, "voltage": 3.2}"#).unwrap();
        assert_eq!(metrics.temp, Some(58.0));
        assert_eq!(metrics.current, None);
    }
}
