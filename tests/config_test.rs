//! 設定ファイルのテスト

use tempfile::tempdir;
use vaccine_ocr_rust::config::Config;

/// ファイルが無ければ既定値
#[test]
fn test_load_missing_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");
    assert_eq!(config, Config::default());
    assert_eq!(config.endpoint, "http://localhost:5001");
    assert_eq!(config.timeout_seconds, 120);
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("http://ocr.local:8080/".into()).expect("設定失敗");
    config.set_timeout(30).expect("設定失敗");
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.endpoint, "http://ocr.local:8080");
    assert_eq!(loaded.timeout_seconds, 30);
}

/// 欠けた項目は既定値で補う
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 10}"#).expect("書き込み失敗");

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.endpoint, "http://localhost:5001");
    assert_eq!(config.timeout_seconds, 10);
}

/// 壊れたJSON
#[test]
fn test_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("書き込み失敗");

    assert!(Config::load_from(&path).is_err());
}

/// 壊れた設定ファイルでも既定値から修復できる
#[test]
fn test_corrupt_file_can_be_repaired() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("書き込み失敗");

    let mut config = Config::load_from_or_default(&path);
    assert_eq!(config, Config::default());

    config.set_endpoint("http://repaired.local".into()).expect("設定失敗");
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("修復後の読み込み失敗");
    assert_eq!(loaded.endpoint, "http://repaired.local");
}

/// `--endpoint` が最優先
#[test]
fn test_flag_overrides_configured_endpoint() {
    let config = Config::default();
    assert_eq!(config.resolve_endpoint(Some("http://flag.local")), "http://flag.local");
}
