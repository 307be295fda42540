//! アップロード前のファイル検証

use thiserror::Error;

use crate::messages;

/// 受け付けるMIMEタイプ
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// アップロード上限（5 MiB、境界値を含む）
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// 検証で弾かれた理由
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("File too large: {0} bytes")]
    TooLarge(u64),
}

impl UploadRejection {
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadRejection::UnsupportedType(_) => messages::UNSUPPORTED_TYPE,
            UploadRejection::TooLarge(_) => messages::TOO_LARGE,
        }
    }
}

/// MIMEタイプとサイズを検証
///
/// 種類のチェックを先に行う。
pub fn validate_upload(mime_type: &str, size: u64) -> Result<(), UploadRejection> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(UploadRejection::UnsupportedType(mime_type.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge(size));
    }
    Ok(())
}

/// ファイル名の拡張子からMIMEタイプを推定
pub fn mime_from_file_name(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_jpeg_and_png() {
        assert!(validate_upload("image/jpeg", 1024).is_ok());
        assert!(validate_upload("image/jpg", 1024).is_ok());
        assert!(validate_upload("image/png", 1024).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let result = validate_upload("image/gif", 10);
        assert_eq!(
            result,
            Err(UploadRejection::UnsupportedType("image/gif".to_string()))
        );
        assert!(validate_upload("", 10).is_err());
        assert!(validate_upload("application/pdf", 10).is_err());
    }

    #[test]
    fn test_size_boundary() {
        assert!(validate_upload("image/png", MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_upload("image/png", MAX_UPLOAD_BYTES + 1),
            Err(UploadRejection::TooLarge(MAX_UPLOAD_BYTES + 1))
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let result = validate_upload("image/gif", MAX_UPLOAD_BYTES * 2);
        assert!(matches!(result, Err(UploadRejection::UnsupportedType(_))));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            UploadRejection::UnsupportedType("x".into()).user_message(),
            "รองรับเฉพาะไฟล์ JPG และ PNG เท่านั้น"
        );
        assert_eq!(UploadRejection::TooLarge(1).user_message(), "ไฟล์ต้องไม่เกิน 5MB");
    }

    #[test]
    fn test_mime_from_file_name() {
        assert_eq!(mime_from_file_name("vial.JPG"), Some("image/jpeg"));
        assert_eq!(mime_from_file_name("label.jpeg"), Some("image/jpeg"));
        assert_eq!(mime_from_file_name("scan.png"), Some("image/png"));
        assert_eq!(mime_from_file_name("scan.gif"), None);
        assert_eq!(mime_from_file_name("noext"), None);
    }
}
