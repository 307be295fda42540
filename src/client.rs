//! OCRサーバーのHTTPクライアント

use crate::error::Result;
use crate::input::LoadedImage;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use vaccine_ocr_common::response::{FILE_FIELD, HEALTH_PATH, PROCESS_PATH};
use vaccine_ocr_common::{classify_response, endpoint_url, Error, HealthStatus, ProcessResponse};

/// 処理結果と受信した本文
#[derive(Debug, Clone)]
pub struct Processed {
    pub response: ProcessResponse,
    pub body: String,
}

pub struct OcrClient {
    http: reqwest::Client,
    base: String,
}

impl OcrClient {
    pub fn new(base: &str, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base: base.to_string(),
        })
    }

    pub fn process_url(&self) -> String {
        endpoint_url(&self.base, PROCESS_PATH)
    }

    pub fn health_url(&self) -> String {
        endpoint_url(&self.base, HEALTH_PATH)
    }

    /// 画像を送信（multipart の `file` フィールド）
    pub async fn process(&self, image: &LoadedImage) -> vaccine_ocr_common::Result<Processed> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(network)?;
        let form = Form::new().part(FILE_FIELD, part);

        let url = self.process_url();
        tracing::info!(%url, file = %image.file_name, "送信");

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(network)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(network)?;
        tracing::debug!(status, bytes = body.len(), "応答を受信");

        let response = classify_response(status, &body)?;
        Ok(Processed { response, body })
    }

    pub async fn health(&self) -> vaccine_ocr_common::Result<HealthStatus> {
        let url = self.health_url();
        tracing::info!(%url, "稼働確認");

        let resp = self.http.get(&url).send().await.map_err(network)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network)?;

        if !status.is_success() {
            return Err(Error::Server {
                status: status.as_u16(),
                detail: body.trim().to_string(),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn network(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        tracing::warn!("タイムアウト: {}", error);
    }
    Error::Network(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_base() {
        let client = OcrClient::new("http://localhost:5001/", 5).expect("クライアント作成失敗");
        assert_eq!(client.process_url(), "http://localhost:5001/api/process");
        assert_eq!(client.health_url(), "http://localhost:5001/api/health");
    }
}
