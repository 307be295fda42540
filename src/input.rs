//! 送信前の画像チェック
//!
//! ブラウザ版と同じ検証（形式・サイズ）を行い、さらに実際にデコードして
//! 壊れたファイルを送信前に弾く。

use crate::error::{Result, VaccineOcrError};
use base64::Engine as _;
use std::io::Read;
use std::path::{Path, PathBuf};
use vaccine_ocr_common::validation::mime_from_file_name;
use vaccine_ocr_common::{validate_upload, Error, Session};

/// 形式判定に使う先頭バイト数
const SNIFF_BYTES: u64 = 64;

/// 読み込み済みの画像
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// `data:image/png;base64,...`
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

pub fn load_image(path: &Path) -> Result<LoadedImage> {
    if !path.is_file() {
        return Err(VaccineOcrError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    // 本体を読む前に先頭の署名とファイルサイズで検証する
    let size = std::fs::metadata(path)?.len();
    let mut header = Vec::with_capacity(SNIFF_BYTES as usize);
    std::fs::File::open(path)?.take(SNIFF_BYTES).read_to_end(&mut header)?;
    let mime_type = detect_mime(&header, &file_name);
    tracing::debug!(file = %file_name, mime = %mime_type, size, "画像を確認");

    validate_upload(&mime_type, size).map_err(Error::from)?;

    let bytes = std::fs::read(path)?;

    let decoded = image::load_from_memory(&bytes).map_err(|e| Error::Decode(e.to_string()))?;

    Ok(LoadedImage {
        path: path.to_path_buf(),
        file_name,
        width: decoded.width(),
        height: decoded.height(),
        mime_type,
        bytes,
    })
}

/// 中身から形式を判定し、判定できなければ拡張子を使う
pub fn detect_mime(bytes: &[u8], file_name: &str) -> String {
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(_) => mime_from_file_name(file_name)
            .unwrap_or("application/octet-stream")
            .to_string(),
    }
}

/// 選択 → プレビュー完了 まで進めたセッションを作る
pub fn prepare_session(image: &LoadedImage) -> Result<Session> {
    let mut session = Session::new();
    let ticket = session.select_file(&image.file_name, &image.mime_type, image.size())?;
    if !session.preview_loaded(ticket, image.data_url()) {
        return Err(Error::Decode(image.file_name.clone()).into());
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_detect_mime_prefers_content() {
        assert_eq!(detect_mime(PNG_MAGIC, "label.jpg"), "image/png");
        assert_eq!(detect_mime(&[0xFF, 0xD8, 0xFF, 0xE0], "label.png"), "image/jpeg");
    }

    #[test]
    fn test_detect_mime_falls_back_to_extension() {
        assert_eq!(detect_mime(b"not an image", "label.JPG"), "image/jpeg");
        assert_eq!(detect_mime(b"not an image", "notes.txt"), "application/octet-stream");
    }

    #[test]
    fn test_data_url() {
        let image = LoadedImage {
            path: PathBuf::from("a.png"),
            file_name: "a.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![1, 2, 3],
            width: 1,
            height: 1,
        };
        assert_eq!(image.data_url(), "data:image/png;base64,AQID");
    }
}
