//! 統合品質

use leptos::prelude::*;
use vaccine_ocr_common::view::MergeQualityView;

#[component]
pub fn MergeQuality(quality: MergeQualityView) -> impl IntoView {
    view! {
        <div class="card merge-quality">
            <h3>"🔗 คุณภาพการรวมผล"</h3>
            <ul class="quality-rows">
                {quality
                    .rows
                    .into_iter()
                    .map(|row| view! {
                        <li>
                            <span class="quality-label">{row.label}</span>
                            <span class="quality-value">{row.text}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <p class="improvement">
                "ดีขึ้น: "
                <strong class={quality.improvement_class}>{quality.improvement}</strong>
            </p>
        </div>
    }
}
