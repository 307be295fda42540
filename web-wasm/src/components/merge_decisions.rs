//! 統合判断テーブル

use leptos::prelude::*;
use vaccine_ocr_common::view::MergeDecisionRow;

#[component]
pub fn MergeDecisions(rows: Vec<MergeDecisionRow>) -> impl IntoView {
    view! {
        <div class="card merge-decisions">
            <h3>"⚖️ การตัดสินใจรวมผล"</h3>
            <table class="decision-table">
                <thead>
                    <tr>
                        <th>"ฟิลด์"</th>
                        <th>"Tesseract"</th>
                        <th>"EasyOCR"</th>
                        <th>"ผลที่เลือก"</th>
                        <th>"ที่มา"</th>
                        <th>"ผลเทียบ"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let class = row.row_class();
                            let agreement = row.agreement_text();
                            view! {
                                <tr class=class>
                                    <td>{row.label}</td>
                                    <td>{row.tesseract}</td>
                                    <td>{row.easyocr}</td>
                                    <td class="selected">{row.selected}</td>
                                    <td>{row.source}</td>
                                    <td>{agreement}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
