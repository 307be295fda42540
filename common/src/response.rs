//! バックエンドとの送受信の取り決め
//!
//! HTTPの送受信そのものは各フロントエンド（fetch / reqwest）が行い、
//! ステータスと本文の解釈はここで一本化する。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::ProcessResponse;

/// 解析エンドポイント
pub const PROCESS_PATH: &str = "/api/process";

/// ヘルスチェックエンドポイント
pub const HEALTH_PATH: &str = "/api/health";

/// multipartのファイルフィールド名
pub const FILE_FIELD: &str = "file";

/// ベースURLとパスを連結
///
/// ベースが空ならパスをそのまま返す（ブラウザ版の同一オリジン）。
pub fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// HTTPステータスと本文から結果を判定
///
/// - 2xx以外: `Error::Server`（本文はエラー詳細のテキスト扱い）
/// - JSONでない本文: `Error::Json`
/// - `success: false`: `Error::Application`
pub fn classify_response(status: u16, body: &str) -> Result<ProcessResponse> {
    if !(200..300).contains(&status) {
        return Err(Error::Server {
            status,
            detail: body.trim().to_string(),
        });
    }

    let value: Value = serde_json::from_str(body)?;
    let response = ProcessResponse::from_value(&value);

    if response.success == Some(false) {
        let message = response
            .error
            .clone()
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(Error::Application(message));
    }

    Ok(response)
}

/// `/api/health` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub upload_folder: String,
    pub max_file_size: u64,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("", PROCESS_PATH), "/api/process");
        assert_eq!(
            endpoint_url("http://localhost:5001/", PROCESS_PATH),
            "http://localhost:5001/api/process"
        );
        assert_eq!(
            endpoint_url("http://ocr.local", "api/health"),
            "http://ocr.local/api/health"
        );
    }

    #[test]
    fn test_classify_server_error() {
        let result = classify_response(500, "Internal Server Error\n");
        match result {
            Err(Error::Server { status, detail }) => {
                assert_eq!(status, 500);
                assert_eq!(detail, "Internal Server Error");
            }
            other => panic!("Serverエラーを期待: {:?}", other),
        }
    }

    #[test]
    fn test_classify_application_error() {
        let result = classify_response(200, r#"{"success": false, "error": "Failed to load image"}"#);
        assert!(matches!(result, Err(Error::Application(ref m)) if m == "Failed to load image"));
    }

    #[test]
    fn test_classify_application_error_without_message() {
        let result = classify_response(200, r#"{"success": false}"#);
        assert!(matches!(result, Err(Error::Application(ref m)) if m == "Unknown error"));
    }

    #[test]
    fn test_classify_invalid_json() {
        let result = classify_response(200, "<html>oops</html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_classify_success_without_flag() {
        // success フィールドを持たない版のバックエンドも受け付ける
        let result = classify_response(200, r#"{"tesseract": {"data": {}}}"#);
        let response = result.expect("成功を期待");
        assert!(response.tesseract.is_some());
    }

    #[test]
    fn test_health_status_deserialize() {
        let json = r#"{"status": "healthy", "timestamp": "2025-01-01T00:00:00", "max_file_size": 5242880}"#;
        let health: HealthStatus = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(health.is_healthy());
        assert_eq!(health.max_file_size, 5 * 1024 * 1024);
        assert_eq!(health.upload_folder, "");
    }
}
