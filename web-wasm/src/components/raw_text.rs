//! 生OCRテキスト（折りたたみ）

use leptos::prelude::*;
use vaccine_ocr_common::view::RawTextBlock;

#[component]
pub fn RawText(blocks: Vec<RawTextBlock>, show_raw: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="card raw-text">
            <button
                id="rawToggle"
                class="btn btn-link"
                on:click=move |_| show_raw.update(|shown| *shown = !*shown)
            >
                {move || if show_raw.get() { "▼ ซ่อนข้อความดิบ" } else { "▶ แสดงข้อความดิบ" }}
            </button>
            <div
                class="raw-blocks"
                style:display=move || if show_raw.get() { "grid" } else { "none" }
            >
                {blocks
                    .into_iter()
                    .map(|block| view! {
                        <div class="raw-block">
                            <h4>{block.title}</h4>
                            <pre id={block.dom_id}>{block.text}</pre>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
