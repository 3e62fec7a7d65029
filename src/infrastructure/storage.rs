//! 文件存储基础设施
//!
//! 整个用户集合以 JSON 数组形式存放在单个文本文件中，
//! 每次操作都整体读取或整体写回，不做增量更新。
//! 读写失败只记录日志，调用方观察不到错误信号。

use std::fs;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::app::users::model::User;

/// 基于平面文件的记录存储
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取全部用户
    ///
    /// 文件不存在时创建空集合文件并返回空；
    /// 内容为空或损坏时退化为空集合，不向调用方报错。
    pub fn load(&self) -> Vec<User> {
        if !self.path.exists() {
            if let Err(e) = fs::write(&self.path, "[]") {
                error!("初始化存储文件失败: {}", e);
            }
            return Vec::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(e) => {
                error!("读取存储文件失败: {}", e);
                Vec::new()
            }
        }
    }

    /// 整体写回全部用户（两空格缩进的 JSON 数组）
    ///
    /// 写入失败只记录日志，对调用方表现为静默无操作。
    pub fn save(&self, users: &[User]) {
        match serde_json::to_string_pretty(users) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.path, data) {
                    error!("写入存储文件失败: {}", e);
                }
            }
            Err(e) => error!("序列化用户集合失败: {}", e),
        }
    }
}
