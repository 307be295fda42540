//! アップロードエリアコンポーネント

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

use crate::controller::Controller;

#[component]
pub fn UploadArea(controller: Controller, visible: Signal<bool>) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            controller.select_file(file);
        }
        // 同じファイルを選び直しても change が発火するように空にする
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            controller.select_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            id="uploadCard"
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            style:display=move || if visible.get() { "block" } else { "none" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                id="fileInput"
                accept="image/jpeg,image/jpg,image/png"
                style="display: none"
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            <div class="upload-icon">"💉"</div>
            <p>"ลากรูปฉลากวัคซีนมาวาง หรือคลิกเพื่อเลือกไฟล์"</p>
            <p class="text-muted">"รองรับ JPG, PNG ขนาดไม่เกิน 5MB"</p>
        </div>
    }
}
