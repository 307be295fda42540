//! 結果の出力（端末表示・HTMLレポート・JSON保存）

pub mod html;
pub mod terminal;

use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use vaccine_ocr_common::ResultView;

/// 処理中のスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// サーバー応答をそのまま（整形して）保存
pub fn write_json(path: &Path, body: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

pub fn write_html(path: &Path, view: &ResultView, image_data_url: Option<&str>) -> Result<()> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let document = html::render(view, image_data_url, &generated_at)?;
    std::fs::write(path, document)?;
    Ok(())
}
