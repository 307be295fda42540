//! フィールド別精度バー

use leptos::prelude::*;
use vaccine_ocr_common::view::FieldAccuracyRow;

#[component]
pub fn FieldAccuracy(rows: Vec<FieldAccuracyRow>) -> impl IntoView {
    view! {
        <div class="card field-accuracy">
            <h3>"🎯 ความแม่นยำรายฟิลด์"</h3>
            {rows
                .into_iter()
                .map(|row| view! {
                    <div class="field-accuracy-row">
                        <span class="field-label">{row.label}</span>
                        <div class="bar tess">
                            <div class="bar-fill" style={format!("width: {}%", row.tesseract)} />
                            <span class="bar-text">{row.tesseract_text}</span>
                        </div>
                        <div class="bar easy">
                            <div class="bar-fill" style={format!("width: {}%", row.easyocr)} />
                            <span class="bar-text">{row.easyocr_text}</span>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
