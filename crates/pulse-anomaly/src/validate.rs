use crate::error::{AnomalyError, Result};
use pulse_types::{Metrics, SensorEvent};

/// 校验传感器事件
///
/// 事件必须携带非空 `id`，且指标记录通过 [`validate_metrics`]。
pub fn validate_event(event: &SensorEvent) -> Result<()> {
    if event.id.trim().is_empty() {
        return Err(AnomalyError::validation("Event id cannot be empty"));
    }
    validate_metrics(&event.metrics)
}

/// 校验指标记录
///
/// 分类至少需要 `temp` 与 `current`，所有存在的取值必须是有限数。
pub fn validate_metrics(metrics: &Metrics) -> Result<()> {
    for (feature, value) in metrics.present_features() {
        if !value.is_finite() {
            return Err(AnomalyError::validation(format!(
                "Metric '{}' must be a finite number, got {}",
                feature, value
            )));
        }
    }

    if metrics.temp.is_none() {
        return Err(AnomalyError::validation("Missing required metric 'temp'"));
    }
    if metrics.current.is_none() {
        return Err(AnomalyError::validation(
            "Missing required metric 'current'",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_event() {
        let event = SensorEvent::new("E-101", Metrics::new(58.0, 2.8).with_voltage(3.2));
        assert!(validate_event(&event).is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        let event = SensorEvent::new("  ", Metrics::new(40.0, 1.0));
        assert!(validate_event(&event).is_err());
    }

    #[test]
    fn test_missing_current_rejected() {
        let metrics = Metrics {
            temp: Some(40.0),
            ..Default::default()
        };
        let err = validate_metrics(&metrics).unwrap_err();
        assert!(err.to_string().contains("current"));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let metrics = Metrics::new(f64::NAN, 1.0);
        assert!(validate_metrics(&metrics).is_err());

        let metrics = Metrics::new(40.0, 1.0).with_humidity(f64::INFINITY);
        assert!(validate_metrics(&metrics).is_err());
    }
}
