//! 画面の操作ハンドラ
//!
//! 状態遷移そのものは `Session` が持ち、ここではブラウザ側の副作用
//! （ファイル読み込み・送信・グラフ描画・スクロール・通知）だけを扱う。

use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use vaccine_ocr_common::{messages, Completion, Error, ResultView, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FileReader, ProgressEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::api;
use crate::charts::ChartBoard;
use crate::components::toast::{Toast, ToastLevel};
use crate::config;

/// トーストの表示時間
const TOAST_MILLIS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct Controller {
    pub session: RwSignal<Session>,
    pub toasts: RwSignal<Vec<Toast>>,
    pub show_raw: RwSignal<bool>,
    pub results_ref: NodeRef<html::Section>,
    file: StoredValue<Option<File>, LocalStorage>,
    charts: StoredValue<ChartBoard, LocalStorage>,
    toast_seq: StoredValue<u64>,
    endpoint: StoredValue<String>,
}

impl Controller {
    pub fn new() -> Self {
        let endpoint = config::process_endpoint();
        console::log!(format!("OCR endpoint: {}", endpoint));

        Self {
            session: RwSignal::new(Session::new()),
            toasts: RwSignal::new(Vec::new()),
            show_raw: RwSignal::new(false),
            results_ref: NodeRef::new(),
            file: StoredValue::new_local(None),
            charts: StoredValue::new_local(ChartBoard::default()),
            toast_seq: StoredValue::new(0),
            endpoint: StoredValue::new(endpoint),
        }
    }

    /// ファイル選択（input / ドラッグ&ドロップ共通）
    pub fn select_file(self, file: File) {
        let name = file.name();
        let mime_type = file.type_();
        let size = file.size().max(0.0) as u64;

        let Some(outcome) = self.session.try_update(|s| s.select_file(&name, &mime_type, size)) else {
            return;
        };

        match outcome {
            Ok(ticket) => {
                console::log!(format!("Selected {} ({}, {} bytes)", name, mime_type, size));
                self.charts.update_value(|board| board.dispose_all());
                self.file.set_value(Some(file.clone()));
                self.read_preview(&file, ticket);
            }
            Err(error) => self.notify_error(&error),
        }
    }

    fn read_preview(self, file: &File, ticket: u64) {
        let reader = match FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                console::error!(format!("FileReader error: {:?}", e));
                self.preview_failed(ticket);
                return;
            }
        };

        let reader_clone = reader.clone();
        let file_name = file.name();
        let onload = Closure::wrap(Box::new(move |_: ProgressEvent| {
            let data_url = reader_clone
                .result()
                .ok()
                .and_then(|result| result.as_string())
                .unwrap_or_default();
            if data_url.is_empty() {
                self.preview_failed(ticket);
            } else {
                let loaded = self
                    .session
                    .try_update(|s| s.preview_loaded(ticket, data_url))
                    .unwrap_or(false);
                if loaded {
                    self.notify(ToastLevel::Info, &messages::file_ready(&file_name));
                }
            }
        }) as Box<dyn FnMut(_)>);

        let onerror = Closure::wrap(Box::new(move |_: ProgressEvent| {
            self.preview_failed(ticket);
        }) as Box<dyn FnMut(_)>);

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();

        if let Err(e) = reader.read_as_data_url(file) {
            console::error!(format!("read_as_data_url error: {:?}", e));
            self.preview_failed(ticket);
        }
    }

    /// プレビュー画像がデコードできなかった（`<img>` の error）
    pub fn image_decode_failed(self) {
        let ticket = self.session.with_untracked(Session::decode_ticket);
        self.preview_failed(ticket);
    }

    fn preview_failed(self, ticket: u64) {
        let cleared = self
            .session
            .try_update(|s| s.preview_failed(ticket))
            .unwrap_or(false);
        if cleared {
            self.file.set_value(None);
            self.notify(ToastLevel::Error, messages::READ_FAILED);
        }
    }

    /// 選択中の画像を送信
    pub fn submit(self) {
        let ticket = match self.session.try_update(|s| s.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(error)) => {
                self.notify_error(&error);
                return;
            }
            None => return,
        };

        self.charts.update_value(|board| board.dispose_all());

        let Some(file) = self.file.get_value() else {
            self.finish(ticket, Err(Error::NoFileSelected));
            return;
        };
        let endpoint = self.endpoint.get_value();
        console::log!(format!("Uploading {} to {}", file.name(), endpoint));

        spawn_local(async move {
            let outcome = api::upload_image(&endpoint, &file)
                .await
                .map(|response| ResultView::from_response(&response));
            self.finish(ticket, outcome);
        });
    }

    fn finish(self, ticket: u64, outcome: Result<ResultView, Error>) {
        match self.session.try_update(|s| s.finish_submit(ticket, outcome)) {
            Some(Completion::Rendered) => {
                console::log!("OCR result rendered");
                // DOMの更新後にグラフを描く
                Timeout::new(0, move || self.after_render()).forget();
            }
            Some(Completion::Failed(error)) => {
                console::error!(format!("Upload failed: {}", error));
                self.notify_error(&error);
            }
            Some(Completion::Stale) | None => {
                console::warn!(format!("Discarded stale response (ticket {})", ticket));
            }
        }
    }

    fn after_render(self) {
        let Some(series) = self.session.with_untracked(|s| s.result().map(|view| view.charts)) else {
            return;
        };

        let errors = self
            .charts
            .try_update_value(|board| board.redraw_all(&series))
            .unwrap_or_default();
        for error in errors {
            console::error!(error);
        }

        if let Some(section) = self.results_ref.get_untracked() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    /// 「เลือกรูปใหม่」
    pub fn reset(self) {
        self.session.update(Session::reset);
        self.file.set_value(None);
        self.charts.update_value(|board| board.dispose_all());
        self.show_raw.set(false);
    }

    pub fn notify_error(self, error: &Error) {
        self.notify(ToastLevel::Error, &error.user_message());
    }

    pub fn notify(self, level: ToastLevel, message: &str) {
        let id = self.toast_seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        });
        let Some(id) = id else {
            return;
        };

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                message: message.to_string(),
                level,
            })
        });

        let toasts = self.toasts;
        Timeout::new(TOAST_MILLIS, move || {
            toasts.update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }
}
