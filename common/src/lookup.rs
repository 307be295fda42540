//! ドット区切りパスによる既定値付き参照
//!
//! バックエンドのレスポンスは形が保証されないため、
//! 表示する値はすべてここを経由して取り出す。
//! 途中のキー欠落・オブジェクト以外の値・`null` はすべて既定値に落ちる。

use serde_json::Value;

use crate::format::js_number;
use crate::messages::NOT_FOUND;

/// `path`（例: `"tesseract.data.product_name"`）をたどって値を返す
///
/// 以下の場合は `None`:
/// - `root` が `None` または `null`
/// - 途中の値がオブジェクトでない
/// - キーが存在しない
/// - 末端の値が `null`
///
/// # Examples
/// ```
/// use serde_json::json;
/// use vaccine_ocr_common::lookup::lookup;
///
/// let payload = json!({"metrics": {"tesseract": {"accuracy": 87.4}}});
/// assert_eq!(lookup(Some(&payload), "metrics.tesseract.accuracy"), Some(&json!(87.4)));
/// assert_eq!(lookup(Some(&payload), "metrics.easyocr.accuracy"), None);
/// ```
pub fn lookup<'a>(root: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    let mut current = root?;
    for key in path.split('.') {
        current = current.as_object()?.get(key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// 見つからなければ `default` を返す
pub fn lookup_or<'a>(root: Option<&'a Value>, path: &str, default: &'a Value) -> &'a Value {
    lookup(root, path).unwrap_or(default)
}

/// 表示用文字列として取り出す（既定値は「ไม่พบ」）
pub fn lookup_text(root: Option<&Value>, path: &str) -> String {
    lookup_text_or(root, path, NOT_FOUND)
}

pub fn lookup_text_or(root: Option<&Value>, path: &str, default: &str) -> String {
    lookup(root, path)
        .map(display_value)
        .unwrap_or_else(|| default.to_string())
}

/// 空文字を欠落とみなして文字列を取り出す
///
/// フォールバック連鎖（`vaccine_name` → `product_name` など）の判定に使う。
pub fn lookup_present(root: Option<&Value>, path: &str) -> Option<String> {
    lookup(root, path)
        .map(display_value)
        .filter(|s| !s.trim().is_empty())
}

/// JSON値をDOMのtextContent相当の文字列に変換
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map(js_number).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_value() {
        let obj = json!({"a": {"b": {"c": "deep"}}});
        assert_eq!(lookup(Some(&obj), "a.b.c"), Some(&json!("deep")));
    }

    #[test]
    fn test_lookup_arbitrary_depth() {
        let obj = json!({"l1": {"l2": {"l3": {"l4": {"l5": 5}}}}});
        assert_eq!(lookup(Some(&obj), "l1.l2.l3.l4.l5"), Some(&json!(5)));
        assert!(lookup(Some(&obj), "l1.l2.l3.l4").unwrap().is_object());
    }

    #[test]
    fn test_lookup_none_root() {
        assert_eq!(lookup(None, "a.b.c"), None);
        assert_eq!(lookup(Some(&Value::Null), "a"), None);
    }

    #[test]
    fn test_lookup_missing_first_key() {
        let obj = json!({"x": 1});
        assert_eq!(lookup(Some(&obj), "a.b.c"), None);
    }

    #[test]
    fn test_lookup_non_object_intermediate() {
        let obj = json!({"a": {"b": "string, not object"}});
        assert_eq!(lookup(Some(&obj), "a.b.c"), None);

        let obj = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(lookup(Some(&obj), "a.b.c"), None);

        let obj = json!({"a": 42});
        assert_eq!(lookup(Some(&obj), "a.b"), None);
    }

    #[test]
    fn test_lookup_missing_leaf() {
        let obj = json!({"a": {"b": {}}});
        assert_eq!(lookup(Some(&obj), "a.b.c"), None);
    }

    #[test]
    fn test_lookup_null_leaf_is_missing() {
        let obj = json!({"a": {"b": {"c": null}}});
        assert_eq!(lookup(Some(&obj), "a.b.c"), None);
    }

    #[test]
    fn test_lookup_or_default() {
        let obj = json!({"a": {"b": 1}});
        let fallback = json!("D");
        assert_eq!(lookup_or(Some(&obj), "a.b.c", &fallback), &fallback);
        assert_eq!(lookup_or(None, "a.b.c", &fallback), &fallback);
        assert_eq!(lookup_or(Some(&obj), "a.b", &fallback), &json!(1));
    }

    #[test]
    fn test_lookup_text_global_default() {
        let obj = json!({});
        assert_eq!(lookup_text(Some(&obj), "tesseract.data.exp_date"), "ไม่พบ");
    }

    #[test]
    fn test_lookup_text_number() {
        let obj = json!({"t": 1.0, "u": 1.236});
        assert_eq!(lookup_text(Some(&obj), "t"), "1");
        assert_eq!(lookup_text(Some(&obj), "u"), "1.236");
    }

    #[test]
    fn test_lookup_present_skips_blank() {
        let obj = json!({"a": "", "b": "   ", "c": "VaxA"});
        assert_eq!(lookup_present(Some(&obj), "a"), None);
        assert_eq!(lookup_present(Some(&obj), "b"), None);
        assert_eq!(lookup_present(Some(&obj), "c"), Some("VaxA".to_string()));
    }

    #[test]
    fn test_lookup_empty_path_segment() {
        let obj = json!({"": {"x": 1}});
        assert_eq!(lookup(Some(&obj), ".x"), Some(&json!(1)));
        assert_eq!(lookup(Some(&json!({"a": 1})), ""), None);
    }

    #[test]
    fn test_display_value_variants() {
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!([1, "a"])), "1,a");
        assert_eq!(display_value(&json!({"k": 1})), "[object Object]");
        assert_eq!(display_value(&json!(-3)), "-3");
    }
}
