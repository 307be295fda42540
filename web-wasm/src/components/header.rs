//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Vaccine OCR - Tesseract vs EasyOCR"</h1>
            <p class="text-muted">"เปรียบเทียบผลการอ่านฉลากวัคซีนจาก 2 เอนจิน"</p>
        </header>
    }
}
