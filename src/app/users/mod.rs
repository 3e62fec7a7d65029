//! 用户应用模块

pub mod handler;
pub mod model;
pub mod service;

use axum::routing::{get, put};
use axum::Router;

use self::handler::AppState;

/// 用户相关路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users).post(handler::create_user))
        .route("/users/search", get(handler::search_users))
        .route(
            "/users/:id",
            put(handler::update_user).delete(handler::delete_user),
        )
}
