//! 数値の表示整形
//!
//! 丸めは JavaScript の `Number.prototype.toFixed` と同じ結果にする。
//! 倍精度値の正確な10進展開を基準に四捨五入する（`value * 10^n` は経由しない）。

/// f64の小数部を正確に書き切れる桁数
const EXACT_FRACTION_DIGITS: usize = 1100;

/// 小数点以下 `digits` 桁で四捨五入して文字列化
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return js_number(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    // 残す桁を1列に並べ、次の桁が5以上なら繰り上げる
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes().get(digits).is_some_and(|b| *b >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let text: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
    let split = text.len() - digits;
    let mut out = String::with_capacity(text.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&text[..split]);
    if digits > 0 {
        out.push('.');
        out.push_str(&text[split..]);
    }
    out
}

/// JavaScriptの数値→文字列変換に近い表記
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{}", value)
}

/// 精度表示（例: `87%`）
pub fn percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 0))
}

/// 処理時間表示（例: `1.24s`）
pub fn seconds(value: f64) -> String {
    format!("{}s", to_fixed(value, 2))
}

/// 符号付きの差分表示（例: `+12.5%`, `-3.0%`, `±0.0%`）
pub fn signed_percent(delta: f64) -> String {
    let text = to_fixed(delta.abs(), 1);
    if text.chars().all(|c| c == '0' || c == '.') {
        format!("±{}%", text)
    } else if delta > 0.0 {
        format!("+{}%", text)
    } else {
        format!("-{}%", text)
    }
}
