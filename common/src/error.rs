//! エラー型定義

use thiserror::Error;

use crate::messages;
use crate::validation::UploadRejection;

/// 共通エラー型
///
/// ブラウザ版・CLI版どちらでも同じ分類で扱う。
/// `user_message()` がユーザー向け通知文（タイ語）を返す。
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Rejected(#[from] UploadRejection),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Upload already in progress")]
    Busy,

    #[error("Server error {status}: {detail}")]
    Server { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Application(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 通知に表示する文言
    pub fn user_message(&self) -> String {
        match self {
            Error::Rejected(rejection) => rejection.user_message().to_string(),
            Error::Decode(_) => messages::READ_FAILED.to_string(),
            Error::NoFileSelected => messages::NO_FILE_SELECTED.to_string(),
            Error::Busy => messages::UPLOAD_IN_PROGRESS.to_string(),
            other => format!("{}{}", messages::ERROR_PREFIX, other),
        }
    }

    /// 通信・サーバ側の失敗か（ローディング解除が必要な終端状態）
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Error::Server { .. } | Error::Network(_) | Error::Application(_) | Error::Json(_)
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_server() {
        let error = Error::Server {
            status: 500,
            detail: "Internal Server Error".to_string(),
        };
        assert_eq!(format!("{}", error), "Server error 500: Internal Server Error");
    }

    #[test]
    fn test_user_message_server_contains_status() {
        let error = Error::Server {
            status: 500,
            detail: "boom".to_string(),
        };
        let message = error.user_message();
        assert!(message.starts_with("เกิดข้อผิดพลาด: "));
        assert!(message.contains("500"));
    }

    #[test]
    fn test_user_message_application() {
        let error = Error::Application("Failed to load image".to_string());
        assert_eq!(error.user_message(), "เกิดข้อผิดพลาด: Failed to load image");
    }

    #[test]
    fn test_user_message_rejection() {
        let error: Error = UploadRejection::TooLarge(6 * 1024 * 1024).into();
        assert_eq!(error.user_message(), "ไฟล์ต้องไม่เกิน 5MB");
        assert!(!error.is_request_failure());
    }

    #[test]
    fn test_user_message_decode() {
        let error = Error::Decode("corrupt".to_string());
        assert_eq!(error.user_message(), "ไม่สามารถอ่านไฟล์ได้");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(error.is_request_failure());
    }

    #[test]
    fn test_request_failure_classification() {
        assert!(Error::Network("offline".into()).is_request_failure());
        assert!(!Error::NoFileSelected.is_request_failure());
        assert!(!Error::Busy.is_request_failure());
    }
}
