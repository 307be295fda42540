//! OCR処理結果の型定義
//!
//! バックエンド（`/api/process`）のレスポンスを型付きで保持する。
//! 構築は `ProcessResponse::from_value` のみで、
//! どんな形のJSONでも失敗せず、欠落はすべて `None` / 空マップになる。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lookup::{lookup, lookup_present};

/// 抽出対象フィールド（表示順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaccineField {
    VaccineName,
    ProductName,
    RegistrationNumber,
    SerialNumber,
    MfgDate,
    ExpDate,
}

impl VaccineField {
    pub const ALL: [VaccineField; 6] = [
        VaccineField::VaccineName,
        VaccineField::ProductName,
        VaccineField::RegistrationNumber,
        VaccineField::SerialNumber,
        VaccineField::MfgDate,
        VaccineField::ExpDate,
    ];

    /// JSON上のキー
    pub fn key(&self) -> &'static str {
        match self {
            VaccineField::VaccineName => "vaccine_name",
            VaccineField::ProductName => "product_name",
            VaccineField::RegistrationNumber => "registration_number",
            VaccineField::SerialNumber => "serial_number",
            VaccineField::MfgDate => "mfg_date",
            VaccineField::ExpDate => "exp_date",
        }
    }

    /// 画面表示用ラベル（タイ語）
    pub fn thai_label(&self) -> &'static str {
        match self {
            VaccineField::VaccineName => "ชื่อวัคซีน",
            VaccineField::ProductName => "ชื่อการค้า",
            VaccineField::RegistrationNumber => "เลขทะเบียน",
            VaccineField::SerialNumber => "Serial Number",
            VaccineField::MfgDate => "วันผลิต",
            VaccineField::ExpDate => "วันหมดอายุ",
        }
    }

    /// DOM要素IDの接尾辞（`tessRegNo` の `RegNo` 部分）
    pub fn dom_suffix(&self) -> &'static str {
        match self {
            VaccineField::VaccineName => "VaccineName",
            VaccineField::ProductName => "TradeName",
            VaccineField::RegistrationNumber => "RegNo",
            VaccineField::SerialNumber => "Serial",
            VaccineField::MfgDate => "Mfg",
            VaccineField::ExpDate => "Exp",
        }
    }
}

/// OCRエンジン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Tesseract,
    #[serde(rename = "easyocr")]
    EasyOcr,
    Hybrid,
}

impl Engine {
    /// グラフの系列順
    pub const ALL: [Engine; 3] = [Engine::Tesseract, Engine::EasyOcr, Engine::Hybrid];

    pub fn key(&self) -> &'static str {
        match self {
            Engine::Tesseract => "tesseract",
            Engine::EasyOcr => "easyocr",
            Engine::Hybrid => "hybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Engine::Tesseract => "Tesseract",
            Engine::EasyOcr => "EasyOCR",
            Engine::Hybrid => "Hybrid",
        }
    }
}

/// 数値指標（数値以外が返ってきた場合はそのまま表示する）
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    fn from_value(value: &Value) -> Self {
        match value.as_f64() {
            Some(n) => MetricValue::Number(n),
            None => MetricValue::Text(crate::lookup::display_value(value)),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Text(_) => None,
        }
    }
}

/// エンジン別の抽出結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineSection {
    /// 空でない値が得られたフィールドのみ
    pub fields: BTreeMap<VaccineField, String>,
    pub raw_left: Option<String>,
    pub raw_right: Option<String>,
    pub raw_output: Option<String>,
    pub formatted_output: Option<String>,
}

impl EngineSection {
    fn from_value(section: &Value) -> Self {
        let root = Some(section);
        Self {
            fields: read_fields(lookup(root, "data")),
            raw_left: lookup_present(root, "raw_left"),
            raw_right: lookup_present(root, "raw_right"),
            raw_output: lookup_present(root, "raw_output"),
            formatted_output: lookup_present(root, "formatted_output"),
        }
    }

    pub fn field(&self, field: VaccineField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }
}

/// 統合結果のフィールド採用元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSource {
    pub source: String,
    pub reason: String,
}

/// 統合（ハイブリッド）結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedSection {
    pub fields: BTreeMap<VaccineField, String>,
    pub sources: BTreeMap<VaccineField, FieldSource>,
    pub formatted_output: Option<String>,
}

impl MergedSection {
    fn from_value(section: &Value) -> Self {
        let root = Some(section);
        let sources_root = lookup(root, "sources");
        let sources = VaccineField::ALL
            .iter()
            .filter_map(|field| {
                let entry = lookup(sources_root, field.key())?;
                if !entry.is_object() {
                    return None;
                }
                let source = FieldSource {
                    source: lookup_present(Some(entry), "source").unwrap_or_else(|| "none".into()),
                    reason: lookup_present(Some(entry), "reason").unwrap_or_else(|| "-".into()),
                };
                Some((*field, source))
            })
            .collect();

        Self {
            fields: read_fields(lookup(root, "data")),
            sources,
            formatted_output: lookup_present(root, "formatted_output"),
        }
    }

    pub fn field(&self, field: VaccineField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }
}

/// エンジン別の指標
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineMetrics {
    pub accuracy: Option<MetricValue>,
    pub processing_time: Option<MetricValue>,
    pub fields_detected: Option<u64>,
    pub total_fields: Option<u64>,
    pub is_complete: Option<bool>,
}

impl EngineMetrics {
    fn from_value(root: Option<&Value>) -> Self {
        Self {
            accuracy: lookup(root, "accuracy").map(MetricValue::from_value),
            processing_time: lookup(root, "processing_time").map(MetricValue::from_value),
            fields_detected: lookup(root, "fields_detected").and_then(Value::as_u64),
            total_fields: lookup(root, "total_fields").and_then(Value::as_u64),
            is_complete: lookup(root, "is_complete").and_then(Value::as_bool),
        }
    }
}

/// 勝者判定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    pub winner: Option<String>,
    pub recommendation: Option<String>,
}

/// 統合品質の集計（`metrics.merge_quality`）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeQuality {
    pub tesseract_accuracy: Option<f64>,
    pub easyocr_accuracy: Option<f64>,
    pub merged_accuracy: Option<f64>,
    pub improvement: Option<f64>,
}

/// フィールド別の精度（`metrics.field_accuracy.<field>`）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldScore {
    pub tesseract: Option<f64>,
    pub easyocr: Option<f64>,
}

/// フィールド別の統合判断（`metrics.merge_decisions.<field>`）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeDecision {
    pub tesseract: Option<String>,
    pub easyocr: Option<String>,
    pub selected: Option<String>,
    pub source: Option<String>,
    pub agreement: Option<bool>,
}

/// `metrics` セクション
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub tesseract: EngineMetrics,
    pub easyocr: EngineMetrics,
    pub hybrid: EngineMetrics,
    pub comparison: Comparison,
    pub merge_quality: Option<MergeQuality>,
    pub field_accuracy: BTreeMap<VaccineField, FieldScore>,
    pub merge_decisions: BTreeMap<VaccineField, MergeDecision>,
}

impl Metrics {
    fn from_value(root: Option<&Value>) -> Self {
        let merge_quality = lookup(root, "merge_quality")
            .filter(|v| v.is_object())
            .map(|mq| {
                let mq = Some(mq);
                MergeQuality {
                    tesseract_accuracy: lookup(mq, "tesseract_accuracy").and_then(Value::as_f64),
                    easyocr_accuracy: lookup(mq, "easyocr_accuracy").and_then(Value::as_f64),
                    merged_accuracy: lookup(mq, "merged_accuracy").and_then(Value::as_f64),
                    improvement: lookup(mq, "improvement").and_then(Value::as_f64),
                }
            });

        let field_accuracy_root = lookup(root, "field_accuracy");
        let field_accuracy = VaccineField::ALL
            .iter()
            .filter_map(|field| {
                let entry = lookup(field_accuracy_root, field.key()).filter(|v| v.is_object())?;
                let score = FieldScore {
                    tesseract: lookup(Some(entry), "tesseract").and_then(Value::as_f64),
                    easyocr: lookup(Some(entry), "easyocr").and_then(Value::as_f64),
                };
                Some((*field, score))
            })
            .collect();

        let decisions_root = lookup(root, "merge_decisions");
        let merge_decisions = VaccineField::ALL
            .iter()
            .filter_map(|field| {
                let entry = lookup(decisions_root, field.key()).filter(|v| v.is_object())?;
                let entry = Some(entry);
                let decision = MergeDecision {
                    tesseract: lookup_present(entry, "tesseract"),
                    easyocr: lookup_present(entry, "easyocr"),
                    selected: lookup_present(entry, "selected"),
                    source: lookup_present(entry, "source"),
                    agreement: lookup(entry, "agreement").and_then(Value::as_bool),
                };
                Some((*field, decision))
            })
            .collect();

        Self {
            tesseract: EngineMetrics::from_value(lookup(root, "tesseract")),
            easyocr: EngineMetrics::from_value(lookup(root, "easyocr")),
            hybrid: EngineMetrics::from_value(lookup(root, "hybrid")),
            comparison: Comparison {
                winner: lookup_present(root, "comparison.winner"),
                recommendation: lookup_present(root, "comparison.recommendation"),
            },
            merge_quality,
            field_accuracy,
            merge_decisions,
        }
    }

    pub fn engine(&self, engine: Engine) -> &EngineMetrics {
        match engine {
            Engine::Tesseract => &self.tesseract,
            Engine::EasyOcr => &self.easyocr,
            Engine::Hybrid => &self.hybrid,
        }
    }
}

/// 画像プレビュー（Data URLまたはサーバ上のパス）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSet {
    pub original: Option<String>,
    pub left_preprocessed: Option<String>,
    pub right_preprocessed: Option<String>,
}

/// `/api/process` のレスポンス全体
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessResponse {
    pub success: Option<bool>,
    pub error: Option<String>,
    pub filename: Option<String>,
    pub tesseract: Option<EngineSection>,
    pub easyocr: Option<EngineSection>,
    pub hybrid: Option<EngineSection>,
    pub merged: Option<MergedSection>,
    pub metrics: Metrics,
    pub images: Option<ImageSet>,
}

impl ProcessResponse {
    /// 任意のJSONから構築（失敗しない）
    pub fn from_value(value: &Value) -> Self {
        let root = Some(value);
        let section = |key: &str| object_at(root, key);

        Self {
            success: lookup(root, "success").and_then(Value::as_bool),
            error: lookup_present(root, "error"),
            filename: lookup_present(root, "filename"),
            tesseract: section("tesseract").map(EngineSection::from_value),
            easyocr: section("easyocr").map(EngineSection::from_value),
            hybrid: section("hybrid").map(EngineSection::from_value),
            merged: section("merged").map(MergedSection::from_value),
            metrics: Metrics::from_value(lookup(root, "metrics")),
            images: section("images").map(|images| {
                let images = Some(images);
                ImageSet {
                    original: lookup_present(images, "original"),
                    left_preprocessed: lookup_present(images, "left_preprocessed"),
                    right_preprocessed: lookup_present(images, "right_preprocessed"),
                }
            }),
        }
    }

    pub fn engine(&self, engine: Engine) -> Option<&EngineSection> {
        match engine {
            Engine::Tesseract => self.tesseract.as_ref(),
            Engine::EasyOcr => self.easyocr.as_ref(),
            Engine::Hybrid => self.hybrid.as_ref(),
        }
    }
}

fn object_at<'a>(root: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    lookup(root, key).filter(|v| v.is_object())
}

fn read_fields(data: Option<&Value>) -> BTreeMap<VaccineField, String> {
    VaccineField::ALL
        .iter()
        .filter_map(|field| lookup_present(data, field.key()).map(|v| (*field, v)))
        .collect()
}
