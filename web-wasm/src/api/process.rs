//! 画像アップロード（POST /api/process）
//!
//! multipart/form-data の `file` フィールドに画像を入れて送る。
//! 応答の分類（HTTPエラー・JSON不正・success=false）は共通ライブラリに任せる。

use vaccine_ocr_common::response::FILE_FIELD;
use vaccine_ocr_common::{classify_response, Error, ProcessResponse, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 画像を送信して処理結果を受け取る
pub async fn upload_image(endpoint: &str, file: &File) -> Result<ProcessResponse> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text.as_string().unwrap_or_default();

    classify_response(resp.status(), &body)
}

/// JS側の例外を通信エラーに変換
fn js_error(value: JsValue) -> Error {
    Error::Network(describe_js_error(&value))
}

fn describe_js_error(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    "Failed to fetch".to_string()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_message_is_kept() {
        let error = js_error(js_sys::Error::new("Failed to fetch").into());
        assert_eq!(error.to_string(), "Network error: Failed to fetch");
        assert!(error.is_request_failure());
    }

    #[wasm_bindgen_test]
    fn wasm_string_error_is_kept() {
        let error = js_error(JsValue::from_str("offline"));
        assert_eq!(error.to_string(), "Network error: offline");
    }
}
