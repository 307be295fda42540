//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use vaccine_ocr_common::{Panels, ResultView, Session};

use crate::components::{
    header::Header,
    image_preview::ImagePreview,
    loading::Loading,
    results::ResultPanels,
    toast::ToastStack,
    upload_area::UploadArea,
};
use crate::controller::Controller;

#[component]
pub fn App() -> impl IntoView {
    let controller = Controller::new();
    let session = controller.session;

    // 画面の表示はすべてセッションから導出する
    let panels = Memo::new(move |_| session.with(Session::panels));
    let result = Memo::new(move |_| session.with(|s| s.result().cloned()));
    let preview_src = Memo::new(move |_| session.with(|s| s.preview_src().map(str::to_string)));
    let uploading = Memo::new(move |_| session.with(Session::is_uploading));

    let panel = move |pick: fn(&Panels) -> bool| Signal::derive(move || panels.with(pick));

    view! {
        <div class="container">
            <Header />

            <UploadArea controller=controller visible={panel(|p| p.upload_card)} />

            <ImagePreview
                controller=controller
                visible={panel(|p| p.image_preview)}
                preview_src={preview_src.into()}
                uploading={uploading.into()}
            />

            <Loading visible={panel(|p| p.loading)} />

            <section
                id="results"
                class="results"
                node_ref={controller.results_ref}
                style:display=move || if panels.get().results { "block" } else { "none" }
            >
                {move || {
                    result
                        .get()
                        .map(|current: ResultView| {
                            view! { <ResultPanels result=current show_raw={controller.show_raw} /> }
                        })
                }}
            </section>

            <ToastStack toasts={controller.toasts} />
        </div>
    }
}
