//! 結果表示（各パネルの組み立て）

use leptos::prelude::*;
use vaccine_ocr_common::ResultView;

use super::engine_card::EnginePanel;
use super::field_accuracy::FieldAccuracy;
use super::merge_decisions::MergeDecisions;
use super::merge_quality::MergeQuality;
use super::metrics_panel::MetricsPanel;
use super::preprocessed_images::PreprocessedImages;
use super::raw_text::RawText;

#[component]
pub fn ResultPanels(result: ResultView, show_raw: RwSignal<bool>) -> impl IntoView {
    let ResultView {
        filename,
        engines,
        merged,
        winner,
        sources_summary,
        raw_texts,
        images,
        merge_quality,
        field_accuracy,
        merge_decisions,
        ..
    } = result;

    let engine_cards = engines
        .iter()
        .cloned()
        .map(|card| view! { <EnginePanel card=card /> })
        .collect_view();

    view! {
        {filename.map(|name| view! { <p class="result-filename">"📄 " {name}</p> })}

        <div class="engine-grid">
            {engine_cards}
            <EnginePanel card=merged />
        </div>

        <MetricsPanel engines=engines winner=winner sources=sources_summary />

        {merge_quality.map(|quality| view! { <MergeQuality quality=quality /> })}

        {(!field_accuracy.is_empty()).then(|| view! { <FieldAccuracy rows=field_accuracy /> })}

        {(!merge_decisions.is_empty()).then(|| view! { <MergeDecisions rows=merge_decisions /> })}

        {(!images.is_empty()).then(|| view! { <PreprocessedImages images=images /> })}

        <RawText blocks=raw_texts show_raw=show_raw />
    }
}
