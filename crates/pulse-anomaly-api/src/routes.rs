use crate::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// 创建 API 路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 异常分析 API
        .route(
            "/api/v1/anomaly/explanation",
            post(handlers::anomaly_explanation),
        )
        .route(
            "/api/v1/anomaly/realtime-stream",
            post(handlers::anomaly_realtime_stream),
        )
        .route(
            "/api/v1/anomaly/rootcause",
            post(handlers::anomaly_rootcause),
        )
        .route("/api/v1/anomaly/summary", post(handlers::anomaly_summary))
        // 添加中间件
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check() -> &'static str {
    "OK"
}
