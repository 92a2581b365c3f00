use thiserror::Error;

use crate::auth::JwtError;
use crate::db::repository::RepoError;

/// Startup and lifecycle errors (request errors use [`shared::AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("JWT 配置错误: {0}")]
    Jwt(#[from] JwtError),

    #[error("数据库错误: {0}")]
    Database(#[from] shared::AppError),

    #[error("初始化失败: {0}")]
    Bootstrap(#[from] RepoError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
