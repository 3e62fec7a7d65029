//! 用户数据模型

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// 用户实体
///
/// 持久化时字段顺序固定为 id、name、age。
/// age 保存为原始 JSON 数值，整数写入后仍以整数形式回写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub age: Number,
}

/// 名称搜索查询参数
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
}
