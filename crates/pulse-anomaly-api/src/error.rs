use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_anomaly::AnomalyError;
use serde_json::json;
use std::fmt;

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 请求错误
    BadRequest(String),
    /// 内部错误
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InternalError(ref msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

// 从引擎错误转换：校验错误是请求方的问题，不变量错误是服务端缺陷
impl From<AnomalyError> for ApiError {
    fn from(err: AnomalyError) -> Self {
        match err {
            AnomalyError::Validation(msg) => ApiError::BadRequest(msg),
            AnomalyError::InvariantViolation(msg) => ApiError::InternalError(msg),
        }
    }
}
