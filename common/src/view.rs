//! 結果表示用のビューモデル
//!
//! `ProcessResponse` から画面に出すすべての文字列・数値を一度に作る。
//! 同じレスポンスからは常に同じ `ResultView` ができるので、
//! 描画側はこれを丸ごと置き換えるだけでよい。

use crate::format::{js_number, percent, seconds, signed_percent};
use crate::messages;
use crate::types::{
    Engine, EngineMetrics, EngineSection, MergedSection, MetricValue, ProcessResponse,
    VaccineField,
};

/// 1フィールド分の表示
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub field: VaccineField,
    pub label: &'static str,
    /// DOM要素ID（例: `tessRegNo`）
    pub dom_id: String,
    pub value: String,
}

/// エンジン別の指標表示
#[derive(Debug, Clone, PartialEq)]
pub struct EngineFigures {
    /// `87%`
    pub accuracy: String,
    /// `1.24s`（小数2桁）
    pub speed: String,
    /// `1.236s`（受信値そのまま）
    pub time: String,
    /// `4/7`
    pub detected: Option<String>,
    pub is_complete: Option<bool>,
}

/// 結果カード（Tesseract / EasyOCR / 統合）
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCard {
    /// DOM要素IDの接頭辞（`tess` / `easy` / `merged`）
    pub prefix: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldRow>,
    pub figures: Option<EngineFigures>,
}

/// 生OCRテキストのブロック
#[derive(Debug, Clone, PartialEq)]
pub struct RawTextBlock {
    pub dom_id: &'static str,
    pub title: String,
    pub text: String,
}

/// 元画像と前処理画像
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagePreviews {
    pub original: Option<String>,
    pub left_preprocessed: Option<String>,
    pub right_preprocessed: Option<String>,
}

impl ImagePreviews {
    pub fn is_empty(&self) -> bool {
        self.original.is_none() && self.left_preprocessed.is_none() && self.right_preprocessed.is_none()
    }
}

/// 統合品質（エンジン別精度と統合後精度、その差分）
#[derive(Debug, Clone, PartialEq)]
pub struct MergeQualityView {
    pub rows: Vec<QualityRow>,
    /// `+12.5%` など
    pub improvement: String,
    /// `positive` / `negative` / `neutral`
    pub improvement_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualityRow {
    pub label: &'static str,
    pub value: f64,
    pub text: String,
}

/// フィールド別精度バー
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccuracyRow {
    pub field: VaccineField,
    pub label: &'static str,
    /// 0〜100にクランプ済み
    pub tesseract: f64,
    pub easyocr: f64,
    pub tesseract_text: String,
    pub easyocr_text: String,
}

/// 統合判断テーブルの1行
#[derive(Debug, Clone, PartialEq)]
pub struct MergeDecisionRow {
    pub field: VaccineField,
    pub label: &'static str,
    pub tesseract: String,
    pub easyocr: String,
    pub selected: String,
    pub source: String,
    pub agreement: bool,
}

impl MergeDecisionRow {
    pub fn row_class(&self) -> &'static str {
        if self.agreement {
            "agree"
        } else {
            "disagree"
        }
    }

    pub fn agreement_text(&self) -> &'static str {
        if self.agreement {
            messages::AGREE
        } else {
            messages::DISAGREE
        }
    }
}

/// グラフ用の数値系列（Tesseract, EasyOCR, Hybrid の順）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartSeries {
    pub accuracy: [f64; 3],
    pub speed: [f64; 3],
}

/// 結果画面全体
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub filename: Option<String>,
    pub engines: Vec<EngineCard>,
    pub merged: EngineCard,
    pub winner: String,
    pub sources_summary: String,
    pub raw_texts: Vec<RawTextBlock>,
    pub images: ImagePreviews,
    pub merge_quality: Option<MergeQualityView>,
    pub field_accuracy: Vec<FieldAccuracyRow>,
    pub merge_decisions: Vec<MergeDecisionRow>,
    pub charts: ChartSeries,
}

impl ResultView {
    pub fn from_response(response: &ProcessResponse) -> Self {
        let metrics = &response.metrics;

        let engines = vec![
            engine_card(
                "tess",
                Engine::Tesseract.label(),
                response.tesseract.as_ref(),
                Some(&metrics.tesseract),
            ),
            engine_card(
                "easy",
                Engine::EasyOcr.label(),
                response.easyocr.as_ref(),
                Some(&metrics.easyocr),
            ),
        ];

        let merged = merged_card(response.merged.as_ref());

        let winner = metrics
            .comparison
            .recommendation
            .clone()
            .or_else(|| metrics.comparison.winner.clone())
            .unwrap_or_else(|| messages::DEFAULT_WINNER.to_string());

        let images = response
            .images
            .as_ref()
            .map(|images| ImagePreviews {
                original: images.original.clone(),
                left_preprocessed: images.left_preprocessed.clone(),
                right_preprocessed: images.right_preprocessed.clone(),
            })
            .unwrap_or_default();

        Self {
            filename: response.filename.clone(),
            engines,
            merged,
            winner,
            sources_summary: sources_summary(response.merged.as_ref()),
            raw_texts: raw_texts(response),
            images,
            merge_quality: merge_quality(response),
            field_accuracy: field_accuracy(response),
            merge_decisions: merge_decisions(response),
            charts: chart_series(response),
        }
    }
}

fn field_rows(prefix: &str, value_of: impl Fn(VaccineField) -> Option<String>) -> Vec<FieldRow> {
    VaccineField::ALL
        .iter()
        .map(|field| {
            let value = match field {
                // ชื่อวัคซีน が無ければ ชื่อการค้า で代用
                VaccineField::VaccineName => value_of(VaccineField::VaccineName)
                    .or_else(|| value_of(VaccineField::ProductName)),
                other => value_of(*other),
            };
            FieldRow {
                field: *field,
                label: field.thai_label(),
                dom_id: format!("{}{}", prefix, field.dom_suffix()),
                value: value.unwrap_or_else(|| messages::NOT_FOUND.to_string()),
            }
        })
        .collect()
}

fn engine_card(
    prefix: &'static str,
    title: &'static str,
    section: Option<&EngineSection>,
    metrics: Option<&EngineMetrics>,
) -> EngineCard {
    let fields = field_rows(prefix, |field| {
        section.and_then(|s| s.field(field)).map(str::to_string)
    });

    EngineCard {
        prefix,
        title,
        fields,
        figures: metrics.map(engine_figures),
    }
}

fn merged_card(section: Option<&MergedSection>) -> EngineCard {
    let fields = field_rows("merged", |field| {
        section.and_then(|s| s.field(field)).map(str::to_string)
    });

    EngineCard {
        prefix: "merged",
        title: "Hybrid",
        fields,
        figures: None,
    }
}

fn engine_figures(metrics: &EngineMetrics) -> EngineFigures {
    let accuracy = match &metrics.accuracy {
        Some(MetricValue::Number(n)) => percent(*n),
        Some(MetricValue::Text(text)) => text.clone(),
        None => percent(0.0),
    };
    let speed = match &metrics.processing_time {
        Some(MetricValue::Number(n)) => seconds(*n),
        Some(MetricValue::Text(text)) => text.clone(),
        None => seconds(0.0),
    };
    let time = match &metrics.processing_time {
        Some(MetricValue::Number(n)) => format!("{}s", js_number(*n)),
        Some(MetricValue::Text(text)) => format!("{}s", text),
        None => "0s".to_string(),
    };
    let detected = match (metrics.fields_detected, metrics.total_fields) {
        (Some(found), Some(total)) => Some(format!("{}/{}", found, total)),
        _ => None,
    };

    EngineFigures {
        accuracy,
        speed,
        time,
        detected,
        is_complete: metrics.is_complete,
    }
}

/// `field: source (reason) | ...`
fn sources_summary(merged: Option<&MergedSection>) -> String {
    let parts: Vec<String> = merged
        .map(|m| {
            m.sources
                .iter()
                .map(|(field, src)| format!("{}: {} ({})", field.key(), src.source, src.reason))
                .collect()
        })
        .unwrap_or_default();

    if parts.is_empty() {
        messages::NO_SOURCES.to_string()
    } else {
        parts.join(" | ")
    }
}

fn raw_texts(response: &ProcessResponse) -> Vec<RawTextBlock> {
    let pick = |section: Option<&EngineSection>, left: bool| -> String {
        section
            .and_then(|s| {
                let side = if left { &s.raw_left } else { &s.raw_right };
                side.clone()
                    .or_else(|| s.raw_output.clone())
                    .or_else(|| s.formatted_output.clone())
            })
            .unwrap_or_else(|| messages::NO_TEXT.to_string())
    };

    let tess = response.tesseract.as_ref();
    let easy = response.easyocr.as_ref();

    vec![
        RawTextBlock {
            dom_id: "tessLeftRaw",
            title: format!("{} - Left", Engine::Tesseract.label()),
            text: pick(tess, true),
        },
        RawTextBlock {
            dom_id: "tessRightRaw",
            title: format!("{} - Right", Engine::Tesseract.label()),
            text: pick(tess, false),
        },
        RawTextBlock {
            dom_id: "easyLeftRaw",
            title: format!("{} - Left", Engine::EasyOcr.label()),
            text: pick(easy, true),
        },
        RawTextBlock {
            dom_id: "easyRightRaw",
            title: format!("{} - Right", Engine::EasyOcr.label()),
            text: pick(easy, false),
        },
    ]
}

fn metric_number(metrics: &EngineMetrics, accuracy: bool) -> Option<f64> {
    let value = if accuracy {
        &metrics.accuracy
    } else {
        &metrics.processing_time
    };
    value.as_ref().and_then(MetricValue::as_f64)
}

fn merge_quality(response: &ProcessResponse) -> Option<MergeQualityView> {
    let metrics = &response.metrics;
    let given = metrics.merge_quality.clone().unwrap_or_default();

    let tess = given
        .tesseract_accuracy
        .or_else(|| metric_number(&metrics.tesseract, true));
    let easy = given
        .easyocr_accuracy
        .or_else(|| metric_number(&metrics.easyocr, true));
    let merged = given
        .merged_accuracy
        .or_else(|| metric_number(&metrics.hybrid, true));

    if tess.is_none() && easy.is_none() && merged.is_none() {
        return None;
    }

    let best_engine = tess.unwrap_or(0.0).max(easy.unwrap_or(0.0));
    let delta = given
        .improvement
        .unwrap_or_else(|| merged.unwrap_or(0.0) - best_engine);
    let improvement = signed_percent(delta);
    let improvement_class = if improvement.starts_with('+') {
        "positive"
    } else if improvement.starts_with('-') {
        "negative"
    } else {
        "neutral"
    };

    let row = |label: &'static str, value: Option<f64>| {
        let value = value.unwrap_or(0.0);
        QualityRow {
            label,
            value,
            text: format!("{}%", crate::format::to_fixed(value, 1)),
        }
    };

    Some(MergeQualityView {
        rows: vec![
            row(Engine::Tesseract.label(), tess),
            row(Engine::EasyOcr.label(), easy),
            row("Merged", merged),
        ],
        improvement,
        improvement_class,
    })
}

fn field_accuracy(response: &ProcessResponse) -> Vec<FieldAccuracyRow> {
    let given = &response.metrics.field_accuracy;
    if given.is_empty() && response.tesseract.is_none() && response.easyocr.is_none() {
        return Vec::new();
    }

    let extracted = |section: Option<&EngineSection>, field: VaccineField| {
        if section.and_then(|s| s.field(field)).is_some() {
            100.0
        } else {
            0.0
        }
    };

    VaccineField::ALL
        .iter()
        .map(|field| {
            let score = given.get(field).copied().unwrap_or_default();
            let tesseract = clamp_percent(
                score
                    .tesseract
                    .unwrap_or_else(|| extracted(response.tesseract.as_ref(), *field)),
            );
            let easyocr = clamp_percent(
                score
                    .easyocr
                    .unwrap_or_else(|| extracted(response.easyocr.as_ref(), *field)),
            );
            FieldAccuracyRow {
                field: *field,
                label: field.thai_label(),
                tesseract,
                easyocr,
                tesseract_text: percent(tesseract),
                easyocr_text: percent(easyocr),
            }
        })
        .collect()
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

fn merge_decisions(response: &ProcessResponse) -> Vec<MergeDecisionRow> {
    let given = &response.metrics.merge_decisions;
    let tess = response.tesseract.as_ref();
    let easy = response.easyocr.as_ref();
    let merged = response.merged.as_ref();

    if given.is_empty() && tess.is_none() && easy.is_none() && merged.is_none() {
        return Vec::new();
    }

    let or_missing = |value: Option<String>| value.unwrap_or_else(|| messages::NOT_FOUND.to_string());

    VaccineField::ALL
        .iter()
        .map(|field| {
            let decision = given.get(field).cloned().unwrap_or_default();

            let tess_value = decision
                .tesseract
                .or_else(|| tess.and_then(|s| s.field(*field)).map(str::to_string));
            let easy_value = decision
                .easyocr
                .or_else(|| easy.and_then(|s| s.field(*field)).map(str::to_string));
            let selected = decision
                .selected
                .or_else(|| merged.and_then(|m| m.field(*field)).map(str::to_string));
            let source = decision.source.or_else(|| {
                merged
                    .and_then(|m| m.sources.get(field))
                    .map(|s| s.source.clone())
            });
            let agreement = decision
                .agreement
                .unwrap_or_else(|| values_agree(tess_value.as_deref(), easy_value.as_deref()));

            MergeDecisionRow {
                field: *field,
                label: field.thai_label(),
                tesseract: or_missing(tess_value),
                easyocr: or_missing(easy_value),
                selected: or_missing(selected),
                source: source.unwrap_or_else(|| messages::NO_SOURCES.to_string()),
                agreement,
            }
        })
        .collect()
}

/// 両エンジンが同じ値を読めたか（前後空白と大文字小文字は無視）
fn values_agree(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.trim().to_lowercase() == b.trim().to_lowercase(),
        _ => false,
    }
}

fn chart_series(response: &ProcessResponse) -> ChartSeries {
    let metrics = &response.metrics;
    let series = |accuracy: bool| -> [f64; 3] {
        Engine::ALL.map(|engine| metric_number(metrics.engine(engine), accuracy).unwrap_or(0.0))
    };

    ChartSeries {
        accuracy: series(true),
        speed: series(false),
    }
}
