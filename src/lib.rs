//! # 用户文件 API
//!
//! 基于 Axum 的最小用户管理服务，整个用户集合以 JSON 数组形式
//! 存放在单个文本文件中：
//! - 文件存储：整体读取 / 整体写回，不做增量更新
//! - 仓库操作：线性扫描的增删改查与名称搜索
//! - 路由层：JSON 请求与响应

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::users::handler::AppState;
use crate::app::users::service::UserService;
use crate::infrastructure::storage::FileStore;

/// 组装完整的应用路由和中间件
pub fn create_app(store: FileStore) -> Router {
    let state = AppState::new(UserService::new(store));

    Router::new()
        .route("/", get(crate::app::users::handler::root))
        .merge(crate::app::users::routes())
        .layer(middleware::from_fn(
            crate::core::middleware::request_logging_middleware,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
