//! ユーザー向け文言（タイ語）
//!
//! 既存ユーザーとの互換のため原文どおりに保持する。

/// 値が見つからない場合の既定表示
pub const NOT_FOUND: &str = "ไม่พบ";

/// 生テキストが無い場合の表示
pub const NO_TEXT: &str = "(ไม่มีข้อความ)";

pub const UNSUPPORTED_TYPE: &str = "รองรับเฉพาะไฟล์ JPG และ PNG เท่านั้น";
pub const TOO_LARGE: &str = "ไฟล์ต้องไม่เกิน 5MB";
pub const READ_FAILED: &str = "ไม่สามารถอ่านไฟล์ได้";
pub const NO_FILE_SELECTED: &str = "กรุณาเลือกไฟล์";
pub const UPLOAD_IN_PROGRESS: &str = "กำลังประมวลผล กรุณารอสักครู่";
pub const ERROR_PREFIX: &str = "เกิดข้อผิดพลาด: ";
pub const FILE_READY: &str = "พร้อมประมวลผล: ";

/// プレビュー完了の通知文
pub fn file_ready(file_name: &str) -> String {
    format!("{}{}", FILE_READY, file_name)
}

/// 推奨ラベルが無い場合の既定値
pub const DEFAULT_WINNER: &str = "Hybrid";

/// ソース要約が作れない場合の表示
pub const NO_SOURCES: &str = "-";

pub const ACCURACY_DATASET_LABEL: &str = "ความแม่นยำ (%)";
pub const SPEED_DATASET_LABEL: &str = "เวลา (วินาที)";

pub const COMPLETE: &str = "ครบถ้วน";
pub const INCOMPLETE: &str = "ไม่ครบ";
pub const AGREE: &str = "ตรงกัน";
pub const DISAGREE: &str = "ไม่ตรงกัน";
