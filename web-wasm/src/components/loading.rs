//! 処理中インジケータ

use leptos::prelude::*;

#[component]
pub fn Loading(visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            id="loading"
            class="progress-container"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div class="progress-bar">
                <div class="progress-fill indeterminate" />
            </div>
            <p class="progress-text">"กำลังประมวลผลด้วย Tesseract และ EasyOCR..."</p>
        </div>
    }
}
