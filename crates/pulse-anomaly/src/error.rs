use thiserror::Error;

/// 异常分析引擎错误类型
#[derive(Error, Debug)]
pub enum AnomalyError {
    /// 输入校验错误（按事件上报，不中断整批处理）
    #[error("Validation error: {0}")]
    Validation(String),

    /// 内部不变量被破坏（逻辑缺陷，视为致命错误）
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// 引擎结果类型别名
pub type Result<T> = std::result::Result<T, AnomalyError>;

impl AnomalyError {
    /// 创建校验错误
    pub fn validation(msg: impl Into<String>) -> Self {
        AnomalyError::Validation(msg.into())
    }

    /// 创建不变量错误
    pub fn invariant(msg: impl Into<String>) -> Self {
        AnomalyError::InvariantViolation(msg.into())
    }
}
