//! 应用模块

pub mod users;
