//! 用户业务服务
//!
//! 每个操作都先从存储整体加载集合，在内存中线性扫描处理，
//! 写操作再把完整集合写回。请求之间不缓存任何状态。

use serde_json::{Number, Value};

use super::model::User;
use crate::core::error::ApiError;
use crate::infrastructure::storage::FileStore;

#[derive(Debug, Clone)]
pub struct UserService {
    store: FileStore,
}

impl UserService {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// 返回全部用户
    pub fn list(&self) -> Vec<User> {
        self.store.load()
    }

    /// 按名称关键字做大小写不敏感的子串搜索
    pub fn search(&self, keyword: Option<&str>) -> Result<Vec<User>, ApiError> {
        let keyword = match keyword {
            Some(k) if !k.is_empty() => k.to_lowercase(),
            _ => {
                return Err(ApiError::BadRequest(
                    "Please provide a name keyword.".to_string(),
                ))
            }
        };

        let users = self.store.load();
        Ok(users
            .into_iter()
            .filter(|u| u.name.to_lowercase().contains(&keyword))
            .collect())
    }

    /// 创建新用户并持久化
    ///
    /// 新 ID 取集合末尾元素的 ID 加一（空集合时为 1）。
    /// 注意：这里沿用末尾元素而非最大 ID 来推算，集合一旦乱序
    /// 可能产生重复 ID，行为与既有数据保持一致。
    pub fn create(&self, body: &Value) -> Result<User, ApiError> {
        let name = string_field(body, "name");
        let age = number_field(body, "age");

        let (name, age) = match (name, age) {
            (Some(name), Some(age)) => (name, age),
            _ => {
                return Err(ApiError::BadRequest(
                    "Invalid input. Require name and age.".to_string(),
                ))
            }
        };

        let mut users = self.store.load();
        let id = users.last().map(|u| u.id + 1).unwrap_or(1);
        let user = User { id, name, age };

        users.push(user.clone());
        self.store.save(&users);

        Ok(user)
    }

    /// 按 ID 更新用户，仅覆盖请求中提供的字段
    pub fn update(&self, id: u64, body: &Value) -> Result<User, ApiError> {
        let name = string_field(body, "name");
        let age = number_field(body, "age");

        if name.is_none() && age.is_none() {
            return Err(ApiError::BadRequest(
                "Provide name or age to update.".to_string(),
            ));
        }

        let mut users = self.store.load();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(age) = age {
            user.age = age;
        }
        let updated = user.clone();

        self.store.save(&users);
        Ok(updated)
    }

    /// 按 ID 删除用户（线性扫描第一个匹配项，无墓碑标记）
    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        let mut users = self.store.load();
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| ApiError::NotFound("User not found.".to_string()))?;

        users.remove(index);
        self.store.save(&users);
        Ok(())
    }
}

/// 提取 JSON 对象中的非空字符串字段，空串和非字符串一律视为缺失
fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// 提取 JSON 对象中的数值字段，非数值一律视为缺失
fn number_field(body: &Value, key: &str) -> Option<Number> {
    match body.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_field() {
        let body = json!({ "name": "Alice", "empty": "", "num": 7 });
        assert_eq!(string_field(&body, "name"), Some("Alice".to_string()));
        assert_eq!(string_field(&body, "empty"), None);
        assert_eq!(string_field(&body, "num"), None);
        assert_eq!(string_field(&body, "missing"), None);
    }

    #[test]
    fn test_number_field() {
        let body = json!({ "age": 30, "half": 29.5, "text": "30" });
        assert_eq!(number_field(&body, "age"), Some(Number::from(30)));
        assert_eq!(
            number_field(&body, "half"),
            Number::from_f64(29.5)
        );
        assert_eq!(number_field(&body, "text"), None);
        assert_eq!(number_field(&body, "missing"), None);
    }
}
