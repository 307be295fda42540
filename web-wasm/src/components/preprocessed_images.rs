//! 元画像と前処理済み画像

use leptos::prelude::*;
use vaccine_ocr_common::view::ImagePreviews;

#[component]
pub fn PreprocessedImages(images: ImagePreviews) -> impl IntoView {
    let slots = [
        ("originalImage", "ภาพต้นฉบับ", images.original),
        ("leftPreprocessed", "ฝั่งซ้าย (หลังปรับภาพ)", images.left_preprocessed),
        ("rightPreprocessed", "ฝั่งขวา (หลังปรับภาพ)", images.right_preprocessed),
    ];

    view! {
        <div class="card preprocessed-images">
            <h3>"🖼️ ภาพที่ใช้ประมวลผล"</h3>
            <div class="image-grid">
                {slots
                    .into_iter()
                    .map(|(id, caption, src)| view! {
                        <figure style:display={if src.is_some() { "block" } else { "none" }}>
                            <img id=id alt=caption src=src.clone() />
                            <figcaption>{caption}</figcaption>
                        </figure>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
