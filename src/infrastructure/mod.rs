//! 基础设施模块：日志与文件存储

pub mod logger;
pub mod storage;
