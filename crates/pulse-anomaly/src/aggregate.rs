use crate::classifier::SeverityClassifier;
use crate::error::{AnomalyError, Result};
use pulse_types::{AggregateWindow, Metrics};
use tracing::debug;

/// 窗口聚合器
///
/// 逐条独立分类并按级别计数。记录之间没有任何依赖（map 分类、
/// reduce 计数），不保留时间顺序。空批次返回全零计数，不是错误。
#[derive(Debug, Clone, Default)]
pub struct WindowAggregator {
    classifier: SeverityClassifier,
}

impl WindowAggregator {
    pub fn new() -> Self {
        Self {
            classifier: SeverityClassifier::new(),
        }
    }

    /// 聚合一批已校验的指标记录
    ///
    /// 计数之和必须等于批次大小，否则属于逻辑缺陷并返回不变量错误。
    pub fn aggregate(&self, batch: &[Metrics]) -> Result<AggregateWindow> {
        let mut window = AggregateWindow::empty();
        for metrics in batch {
            window.record(self.classifier.classify(metrics));
        }

        let total = window.total();
        if total != batch.len() as u64 {
            return Err(AnomalyError::invariant(format!(
                "Aggregate counts sum to {} for a batch of {}",
                total,
                batch.len()
            )));
        }

        debug!(batch_size = batch.len(), "Batch aggregated");
        Ok(window)
    }
}
