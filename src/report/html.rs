//! 単体で開けるHTMLレポート
//!
//! 画像はData URLで埋め込み、グラフはブラウザ版と同じChart.js設定を使う。

use crate::error::{Result, VaccineOcrError};
use std::fmt::Write as _;
use vaccine_ocr_common::view::EngineCard;
use vaccine_ocr_common::{ChartKind, ResultView};

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

pub fn render(view: &ResultView, image_data_url: Option<&str>, generated_at: &str) -> Result<String> {
    let mut body = String::new();

    let _ = writeln!(body, "<h1>Vaccine OCR - Tesseract vs EasyOCR</h1>");
    let _ = writeln!(body, "<p class=\"meta\">{}</p>", escape(generated_at));
    if let Some(name) = &view.filename {
        let _ = writeln!(body, "<p class=\"meta\">📄 {}</p>", escape(name));
    }
    if let Some(src) = image_data_url {
        let _ = writeln!(body, "<img id=\"originalImage\" class=\"source\" src=\"{}\" alt=\"label\">", escape(src));
    }

    body.push_str("<div class=\"grid\">\n");
    for card in view.engines.iter().chain(std::iter::once(&view.merged)) {
        write_card(&mut body, card);
    }
    body.push_str("</div>\n");

    let _ = writeln!(body, "<section><h2>📊 เปรียบเทียบประสิทธิภาพ</h2><ul>");
    for card in &view.engines {
        if let Some(figures) = &card.figures {
            let _ = writeln!(
                body,
                "<li>{}: <strong id=\"{p}Accuracy\">{}</strong> / <span id=\"{p}Speed\">{}</span> / <span id=\"{p}Time\">{}</span></li>",
                escape(card.title),
                escape(&figures.accuracy),
                escape(&figures.speed),
                escape(&figures.time),
                p = card.prefix
            );
        }
    }
    let _ = writeln!(body, "</ul>");
    let _ = writeln!(body, "<p>เอนจินที่แนะนำ: <strong id=\"winnerName\">{}</strong></p>", escape(&view.winner));
    let _ = writeln!(body, "<p>ที่มาของข้อมูลรวม: <span id=\"mergedSources\">{}</span></p>", escape(&view.sources_summary));
    body.push_str("<div class=\"grid\">\n");
    for kind in ChartKind::ALL {
        let _ = writeln!(body, "<div><canvas id=\"{}\"></canvas></div>", kind.canvas_id());
    }
    body.push_str("</div></section>\n");

    if let Some(quality) = &view.merge_quality {
        let _ = writeln!(body, "<section><h2>🔗 คุณภาพการรวมผล</h2><ul>");
        for row in &quality.rows {
            let _ = writeln!(body, "<li>{}: {}</li>", escape(row.label), escape(&row.text));
        }
        let _ = writeln!(
            body,
            "</ul><p>ดีขึ้น: <strong class=\"{}\">{}</strong></p></section>",
            quality.improvement_class,
            escape(&quality.improvement)
        );
    }

    if !view.merge_decisions.is_empty() {
        body.push_str("<section><h2>⚖️ การตัดสินใจรวมผล</h2><table>\n");
        body.push_str("<tr><th>ฟิลด์</th><th>Tesseract</th><th>EasyOCR</th><th>ผลที่เลือก</th><th>ที่มา</th><th>ผลเทียบ</th></tr>\n");
        for row in &view.merge_decisions {
            let _ = writeln!(
                body,
                "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.row_class(),
                escape(row.label),
                escape(&row.tesseract),
                escape(&row.easyocr),
                escape(&row.selected),
                escape(&row.source),
                row.agreement_text()
            );
        }
        body.push_str("</table></section>\n");
    }

    body.push_str("<section><h2>📝 ข้อความดิบ</h2>\n");
    for block in &view.raw_texts {
        let _ = writeln!(
            body,
            "<h3>{}</h3><pre id=\"{}\">{}</pre>",
            escape(&block.title),
            block.dom_id,
            escape(&block.text)
        );
    }
    body.push_str("</section>\n");

    let mut script = String::new();
    for kind in ChartKind::ALL {
        let config = kind
            .config_json(&view.charts)
            .map_err(|e| VaccineOcrError::Report(e.to_string()))?;
        let _ = writeln!(
            script,
            "new Chart(document.getElementById('{}'), {});",
            kind.canvas_id(),
            script_safe(&config)
        );
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"th\">\n<head>\n<meta charset=\"utf-8\">\n<title>Vaccine OCR Report</title>\n<script src=\"{}\"></script>\n<style>{}</style>\n</head>\n<body>\n{}<script>\n{}</script>\n</body>\n</html>\n",
        CHART_JS_CDN, STYLE, body, script
    ))
}

fn write_card(out: &mut String, card: &EngineCard) {
    let _ = writeln!(out, "<div class=\"card {}\"><h2>{}</h2><dl>", card.prefix, escape(card.title));
    for row in &card.fields {
        let _ = writeln!(
            out,
            "<dt>{}</dt><dd id=\"{}\">{}</dd>",
            escape(row.label),
            escape(&row.dom_id),
            escape(&row.value)
        );
    }
    out.push_str("</dl></div>\n");
}

/// HTML特殊文字のエスケープ
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `<script>` 内に埋め込むJSONで `</script>` が閉じないようにする
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

const STYLE: &str = "body{font-family:sans-serif;max-width:1100px;margin:0 auto;padding:16px;background:#f5f7fb}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:16px}\
.card,section{background:#fff;border-radius:12px;padding:12px 16px;margin-top:16px}\
.source{max-width:360px;border-radius:8px}\
dl{display:grid;grid-template-columns:auto 1fr;gap:4px 12px}dd{margin:0;font-weight:600}\
table{width:100%;border-collapse:collapse}td,th{padding:4px 8px;border-bottom:1px solid #eee;text-align:left}\
tr.agree{background:#f0fff4}tr.disagree{background:#fff5f5}\
.positive{color:#38a169}.negative{color:#e53e3e}.neutral{color:#636e72}\
pre{white-space:pre-wrap;background:#2d3436;color:#dfe6e9;padding:8px;border-radius:6px}\
.meta{color:#808e9b}";
