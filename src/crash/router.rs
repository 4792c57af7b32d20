//! 崩溃上报路由

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit, routing::any};
use http::Method;
use tower_http::cors::{Any, CorsLayer};

use crate::model::config::Config;

use super::handlers::handle_crash_report;
use super::store::RecordStore;

/// 崩溃上报状态
#[derive(Clone)]
pub struct IntakeState {
    pub store: Arc<dyn RecordStore>,
}

/// 创建崩溃上报路由
///
/// `/` 与所有其他路径都交给同一个处理器
pub fn create_crash_router(store: Arc<dyn RecordStore>, max_body_bytes: usize) -> Router {
    let state = IntakeState { store };

    Router::new()
        .route("/", any(handle_crash_report))
        .fallback(handle_crash_report)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// 按配置构建对外服务的应用
///
/// 启用 CORS 时预检请求由 CORS 层应答，且只声明 GET/POST
pub fn build_app(config: &Config, store: Arc<dyn RecordStore>) -> Router {
    let app = create_crash_router(store, config.max_body_bytes);
    if !config.cors_enabled {
        return app;
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any),
    )
}
