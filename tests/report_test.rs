//! レポート出力のテスト

use serde_json::json;
use tempfile::tempdir;
use vaccine_ocr_common::{ProcessResponse, ResultView};
use vaccine_ocr_rust::report::{self, html, terminal};

fn sample_view() -> ResultView {
    let payload = json!({
        "success": true,
        "filename": "vial<1>.jpg",
        "tesseract": {"data": {"vaccine_name": "Rabies <Vero>", "registration_number": "1C 15/57"}},
        "easyocr": {"data": {"product_name": "VaxA"}},
        "merged": {
            "data": {"vaccine_name": "Rabies Vero"},
            "sources": {"vaccine_name": {"source": "tesseract", "reason": "longer"}}
        },
        "metrics": {
            "tesseract": {"accuracy": 87, "processing_time": 1.236},
            "easyocr": {"accuracy": 71.4, "processing_time": 6.2},
            "hybrid": {"accuracy": 92},
            "comparison": {"winner": "tesseract"}
        }
    });
    ResultView::from_response(&ProcessResponse::from_value(&payload))
}

#[test]
fn test_terminal_report_sections() {
    let text = terminal::render(&sample_view());

    assert!(text.contains("vial<1>.jpg"));
    assert!(text.contains("Rabies <Vero>"));
    assert!(text.contains("VaxA"));
    assert!(text.contains("87%"));
    assert!(text.contains("1.24s"));
    assert!(text.contains("推奨: tesseract"));
    assert!(text.contains("vaccine_name: tesseract (longer)"));
    assert!(text.contains("ไม่พบ"));
}

#[test]
fn test_html_report_escapes_and_embeds() {
    let document = html::render(&sample_view(), Some("data:image/png;base64,AAAA"), "2026-10-16 09:00:00")
        .expect("HTML生成失敗");

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("Rabies &lt;Vero&gt;"));
    assert!(!document.contains("Rabies <Vero>"));
    assert!(document.contains("vial&lt;1&gt;.jpg"));
    assert!(document.contains("src=\"data:image/png;base64,AAAA\""));
    assert!(document.contains("id=\"tessVaccineName\""));
    assert!(document.contains("id=\"winnerName\">tesseract<"));
    assert!(document.contains("getElementById('accuracyChart')"));
    assert!(document.contains("getElementById('speedChart')"));
    assert!(document.contains("\"type\":\"bar\""));
}

#[test]
fn test_write_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json_path = dir.path().join("result.json");
    let html_path = dir.path().join("report.html");

    report::write_json(&json_path, r#"{"success":true,"filename":"a.jpg"}"#).expect("JSON保存失敗");
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).expect("読み込み失敗")).expect("JSON不正");
    assert_eq!(saved["filename"], "a.jpg");

    report::write_html(&html_path, &sample_view(), None).expect("HTML保存失敗");
    let html_text = std::fs::read_to_string(&html_path).expect("読み込み失敗");
    assert!(!html_text.contains("originalImage"));
}

#[test]
fn test_write_json_rejects_non_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    assert!(report::write_json(&dir.path().join("x.json"), "<html>").is_err());
}
