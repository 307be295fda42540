//! vaccine-ocr CLI
//!
//! ラベル画像をOCRサーバーに送り、Tesseract / EasyOCR / 統合結果を比較表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
