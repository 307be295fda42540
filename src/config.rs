use crate::error::{Result, VaccineOcrError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 接続先を上書きする環境変数
pub const ENDPOINT_ENV: &str = "VACCINE_OCR_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OCRサーバーのベースURL
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5001".into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 壊れた設定ファイルでも既定値で続行する（`config` コマンドで修復するため）
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_from_or_default(&Self::config_path()?))
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("設定ファイルを読めないため既定値を使います: {} ({})", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VaccineOcrError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("vaccine-ocr").join("config.json"))
    }

    /// 接続先の決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> String {
        let from_env = std::env::var(ENDPOINT_ENV).ok();
        pick_endpoint(flag, from_env.as_deref(), &self.endpoint)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(VaccineOcrError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(VaccineOcrError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }
}

fn pick_endpoint(flag: Option<&str>, env: Option<&str>, configured: &str) -> String {
    [flag, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(configured)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_priority() {
        assert_eq!(pick_endpoint(Some("http://a"), Some("http://b"), "http://c"), "http://a");
        assert_eq!(pick_endpoint(None, Some("http://b"), "http://c"), "http://b");
        assert_eq!(pick_endpoint(Some("  "), None, "http://c"), "http://c");
    }

    #[test]
    fn test_set_endpoint_validates_scheme() {
        let mut config = Config::default();
        assert!(config.set_endpoint("ocr.local:5001".into()).is_err());
        assert_eq!(config.endpoint, "http://localhost:5001");

        config.set_endpoint("https://ocr.example.com/".into()).expect("設定失敗");
        assert_eq!(config.endpoint, "https://ocr.example.com");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        assert!(config.set_timeout(0).is_err());
        config.set_timeout(30).expect("設定失敗");
        assert_eq!(config.timeout_seconds, 30);
    }
}
