use thiserror::Error;

/// 启动阶段错误
///
/// 请求处理使用 [`AppError`](crate::AppError)，这里只覆盖配置、数据库和监听端口。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
