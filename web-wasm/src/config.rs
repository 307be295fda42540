//! 接続先の設定
//!
//! 既定ではページと同じオリジンの `/api/process` に送る。
//! 別サーバーに向ける場合は index.html に
//! `<meta name="vaccine-ocr-endpoint" content="http://host:5000">` を置く。

use vaccine_ocr_common::endpoint_url;
use vaccine_ocr_common::response::PROCESS_PATH;

const ENDPOINT_META: &str = "meta[name=\"vaccine-ocr-endpoint\"]";

/// 処理エンドポイントのURL
pub fn process_endpoint() -> String {
    endpoint_url(&endpoint_base().unwrap_or_default(), PROCESS_PATH)
}

fn endpoint_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(ENDPOINT_META).ok()??;
    meta.get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_endpoint_defaults_to_same_origin() {
        assert_eq!(process_endpoint(), "/api/process");
    }

    #[wasm_bindgen_test]
    fn wasm_endpoint_reads_meta_tag() {
        let document = web_sys::window().unwrap().document().unwrap();
        let meta = document.create_element("meta").unwrap();
        meta.set_attribute("name", "vaccine-ocr-endpoint").unwrap();
        meta.set_attribute("content", "http://localhost:5000/").unwrap();
        document.head().unwrap().append_child(&meta).unwrap();

        assert_eq!(process_endpoint(), "http://localhost:5000/api/process");

        meta.remove();
    }
}
