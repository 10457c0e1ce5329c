//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 操作の拒否（ユーザーに通知する）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Cannot remove official entry: {0}")]
    NotRemovable(String),

    #[error("Unknown entry: {0}")]
    UnknownEntity(String),
}
