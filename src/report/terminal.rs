//! 端末向けテキストレポート

use std::fmt::Write as _;
use vaccine_ocr_common::view::{EngineCard, FieldAccuracyRow};
use vaccine_ocr_common::ResultView;

const BAR_WIDTH: usize = 20;

pub fn render(view: &ResultView) -> String {
    let mut out = String::new();

    if let Some(name) = &view.filename {
        let _ = writeln!(out, "📄 {}\n", name);
    }

    for card in view.engines.iter().chain(std::iter::once(&view.merged)) {
        write_card(&mut out, card);
    }

    let _ = writeln!(out, "📊 指標");
    for card in &view.engines {
        if let Some(figures) = &card.figures {
            let _ = writeln!(
                out,
                "  {:<10} 精度 {:>6}  速度 {:>7}  時間 {}",
                card.title, figures.accuracy, figures.speed, figures.time
            );
        }
    }
    let _ = writeln!(out, "  推奨: {}", view.winner);
    let _ = writeln!(out, "  統合の出典: {}\n", view.sources_summary);

    if let Some(quality) = &view.merge_quality {
        let _ = writeln!(out, "🔗 統合品質");
        for row in &quality.rows {
            let _ = writeln!(out, "  {:<10} {}", row.label, row.text);
        }
        let _ = writeln!(out, "  改善幅     {}\n", quality.improvement);
    }

    if !view.field_accuracy.is_empty() {
        let _ = writeln!(out, "🎯 フィールド別精度（Tesseract / EasyOCR）");
        for row in &view.field_accuracy {
            write_accuracy_row(&mut out, row);
        }
        out.push('\n');
    }

    if !view.merge_decisions.is_empty() {
        let _ = writeln!(out, "⚖️  統合判断");
        for row in &view.merge_decisions {
            let _ = writeln!(
                out,
                "  [{}] {}: {} | {} → {} ({})",
                if row.agreement { "=" } else { "≠" },
                row.label,
                row.tesseract,
                row.easyocr,
                row.selected,
                row.source
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "📝 生テキスト");
    for block in &view.raw_texts {
        let _ = writeln!(out, "--- {} ---", block.title);
        let _ = writeln!(out, "{}", block.text);
    }

    out
}

fn write_card(out: &mut String, card: &EngineCard) {
    let _ = write!(out, "■ {}", card.title);
    if let Some(figures) = &card.figures {
        if let Some(detected) = &figures.detected {
            let _ = write!(out, "  [{}]", detected);
        }
    }
    out.push('\n');
    for row in &card.fields {
        let _ = writeln!(out, "  {}: {}", row.label, row.value);
    }
    out.push('\n');
}

fn write_accuracy_row(out: &mut String, row: &FieldAccuracyRow) {
    let _ = writeln!(
        out,
        "  {}\n    T {} {}\n    E {} {}",
        row.label,
        bar(row.tesseract),
        row.tesseract_text,
        bar(row.easyocr),
        row.easyocr_text
    );
}

/// 0〜100 を `#` と `.` の棒で表す
pub fn bar(value: f64) -> String {
    let ratio = (value / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.0), ".".repeat(20));
        assert_eq!(bar(50.0), format!("{}{}", "#".repeat(10), ".".repeat(10)));
        assert_eq!(bar(100.0), "#".repeat(20));
        assert_eq!(bar(150.0), "#".repeat(20));
        assert_eq!(bar(f64::NAN).len(), 20);
    }
}
