use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データセットが見つかりません: {0}")]
    DatasetNotFound(String),

    #[error("不明なステータス: {0}")]
    UnknownStatus(String),

    #[error("不明な値: {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Rejected(#[from] trade_tracker_common::TrackerError),

    #[error(transparent)]
    Common(#[from] trade_tracker_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
