use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaccineOcrError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// 検証・通信・応答の失敗（タイ語の利用者向けメッセージで表示）
    #[error("{}", .0.user_message())]
    Ocr(#[from] vaccine_ocr_common::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("レポート出力エラー: {0}")]
    Report(String),
}

pub type Result<T> = std::result::Result<T, VaccineOcrError>;
