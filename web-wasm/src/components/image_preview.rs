//! 選択画像のプレビューと送信ボタン

use leptos::prelude::*;

use crate::controller::Controller;

#[component]
pub fn ImagePreview(
    controller: Controller,
    visible: Signal<bool>,
    preview_src: Signal<Option<String>>,
    uploading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            id="imagePreview"
            class="image-preview"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <img
                id="previewImg"
                alt="preview"
                src=move || preview_src.get()
                on:error=move |_| controller.image_decode_failed()
            />
            <div class="preview-actions">
                <button
                    id="processBtn"
                    class="btn btn-primary"
                    disabled=move || uploading.get()
                    on:click=move |_| controller.submit()
                >
                    {move || if uploading.get() { "กำลังประมวลผล..." } else { "🔍 เริ่มอ่านฉลาก" }}
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || uploading.get()
                    on:click=move |_| controller.reset()
                >
                    "เลือกรูปใหม่"
                </button>
            </div>
        </div>
    }
}
