//! 棒グラフ設定（Chart.js形式）
//!
//! グラフの描画はJavaScript側のChart.jsに任せ、
//! Rust側は設定オブジェクトをJSONで渡すだけにする。

use serde::Serialize;

use crate::messages;
use crate::types::Engine;
use crate::view::ChartSeries;

/// グラフの種類（描画先のcanvasと1対1）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Accuracy,
    Speed,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Accuracy, ChartKind::Speed];

    /// 描画先canvasのID
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartKind::Accuracy => "accuracyChart",
            ChartKind::Speed => "speedChart",
        }
    }

    pub fn config(&self, series: &ChartSeries) -> BarChartConfig {
        match self {
            ChartKind::Accuracy => BarChartConfig::new(
                messages::ACCURACY_DATASET_LABEL,
                series.accuracy,
                ["rgba(9,132,227,0.8)", "rgba(225,112,85,0.8)", "rgba(72,187,120,0.8)"],
                ["rgba(9,132,227,1)", "rgba(225,112,85,1)", "rgba(56,161,105,1)"],
                Some(100.0),
            ),
            ChartKind::Speed => BarChartConfig::new(
                messages::SPEED_DATASET_LABEL,
                series.speed,
                ["rgba(85,239,196,0.8)", "rgba(253,121,168,0.8)", "rgba(129,140,248,0.8)"],
                ["rgba(0,184,148,1)", "rgba(232,67,147,1)", "rgba(99,102,241,1)"],
                None,
            ),
        }
    }

    pub fn config_json(&self, series: &ChartSeries) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.config(series))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: BarChartData,
    pub options: BarChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub background_color: Vec<&'static str>,
    pub border_color: Vec<&'static str>,
    pub border_width: u32,
    pub border_radius: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: serde_json::Value,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub y: YAxis,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl BarChartConfig {
    fn new(
        label: &'static str,
        values: [f64; 3],
        background: [&'static str; 3],
        border: [&'static str; 3],
        y_max: Option<f64>,
    ) -> Self {
        Self {
            kind: "bar",
            data: BarChartData {
                labels: Engine::ALL.iter().map(Engine::label).collect(),
                datasets: vec![BarDataset {
                    label,
                    data: values.to_vec(),
                    background_color: background.to_vec(),
                    border_color: border.to_vec(),
                    border_width: 2,
                    border_radius: 8,
                }],
            },
            options: BarChartOptions {
                responsive: true,
                maintain_aspect_ratio: true,
                plugins: serde_json::json!({ "legend": { "display": false } }),
                scales: Scales {
                    y: YAxis {
                        begin_at_zero: true,
                        max: y_max,
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn series() -> ChartSeries {
        ChartSeries {
            accuracy: [42.9, 71.4, 85.7],
            speed: [1.5, 6.25, 4.0],
        }
    }

    #[test]
    fn test_canvas_ids() {
        assert_eq!(ChartKind::Accuracy.canvas_id(), "accuracyChart");
        assert_eq!(ChartKind::Speed.canvas_id(), "speedChart");
    }

    #[test]
    fn test_accuracy_config_json() {
        let json = ChartKind::Accuracy.config_json(&series()).expect("シリアライズ失敗");
        let value: Value = serde_json::from_str(&json).expect("JSONパース失敗");

        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"], serde_json::json!(["Tesseract", "EasyOCR", "Hybrid"]));
        assert_eq!(value["data"]["datasets"][0]["label"], "ความแม่นยำ (%)");
        assert_eq!(value["data"]["datasets"][0]["data"], serde_json::json!([42.9, 71.4, 85.7]));
        assert_eq!(value["data"]["datasets"][0]["borderRadius"], 8);
        assert_eq!(value["options"]["maintainAspectRatio"], true);
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(value["options"]["scales"]["y"]["max"], 100.0);
    }

    #[test]
    fn test_speed_config_has_no_max() {
        let json = ChartKind::Speed.config_json(&series()).expect("シリアライズ失敗");
        let value: Value = serde_json::from_str(&json).expect("JSONパース失敗");

        assert_eq!(value["data"]["datasets"][0]["label"], "เวลา (วินาที)");
        assert_eq!(value["data"]["datasets"][0]["data"], serde_json::json!([1.5, 6.25, 4.0]));
        assert!(value["options"]["scales"]["y"].get("max").is_none());
        assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], true);
    }
}
