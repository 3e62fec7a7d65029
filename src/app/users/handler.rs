//! 用户路由处理器

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use super::model::{SearchQuery, User};
use super::service::UserService;
use crate::core::error::ApiError;

/// 应用共享状态
///
/// 互斥锁覆盖整个"加载-修改-写回"序列，避免并发写请求
/// 之间互相覆盖。锁内没有挂起点，只有同步文件 I/O。
#[derive(Clone)]
pub struct AppState {
    user_service: Arc<Mutex<UserService>>,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self {
            user_service: Arc::new(Mutex::new(user_service)),
        }
    }
}

/// GET / 服务状态横幅
pub async fn root() -> &'static str {
    "✅ User API is running! Use /users to view data."
}

/// GET /users 返回全部用户
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let service = state.user_service.lock().unwrap();
    Json(service.list())
}

/// GET /users/search?name=keyword 按名称搜索
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<User>>, ApiError> {
    let service = state.user_service.lock().unwrap();
    let users = service.search(query.name.as_deref())?;
    Ok(Json(users))
}

/// POST /users 创建新用户
pub async fn create_user(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);
    let service = state.user_service.lock().unwrap();
    let user = service.create(&body)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id 更新用户
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<User>, ApiError> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);
    let id = parse_id(&id).ok_or_else(not_found)?;
    let service = state.user_service.lock().unwrap();
    let user = service.update(id, &body)?;
    Ok(Json(user))
}

/// DELETE /users/:id 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    let service = state.user_service.lock().unwrap();
    service.delete(id)?;
    Ok(Json(json!({ "message": "User deleted successfully." })))
}

fn not_found() -> ApiError {
    ApiError::NotFound("User not found.".to_string())
}

/// 解析路径中的用户 ID，只取前导十进制数字；
/// 完全非数字的参数按未命中处理（404 而不是 400）
fn parse_id(raw: &str) -> Option<u64> {
    let digits: &str = {
        let end = raw
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(raw.len());
        &raw[..end]
    };
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-1"), None);
    }
}
