use shared::AppError;
use thiserror::Error;

use crate::db::repository::RepoError;

/// 启动 / 运行期错误 (非 HTTP 请求错误)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("存储错误: {0}")]
    Repo(#[from] RepoError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for server lifecycle functions
pub type Result<T> = std::result::Result<T, ServerError>;
