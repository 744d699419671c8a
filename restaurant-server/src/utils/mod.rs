//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppJson`] - 统一 400 拒绝的 JSON 提取器
//! - 日志、时间、分页、校验等工具

pub mod error;
pub mod json;
pub mod logger;
pub mod result;
pub mod time;
pub mod types;
pub mod validation;

pub use error::{AppError, AppResponse, MessageResponse};
pub use json::AppJson;
pub use result::AppResult;
