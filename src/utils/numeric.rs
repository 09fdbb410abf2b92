use serde_json::Value;

/// 严格解析浮点数：去掉首尾空白后整体解析，非有限值视为失败
pub fn parse_float<S: AsRef<str>>(s: S) -> Option<f64> {
    let raw = s.as_ref().trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 解析失败时返回 0
pub fn to_float<S: AsRef<str>>(s: S) -> f64 {
    parse_float(s).unwrap_or(0.0)
}

pub fn to_int<S: AsRef<str>>(s: S) -> i64 {
    s.as_ref().trim().parse::<i64>().unwrap_or(0)
}

/// 四舍五入到两位小数（远离零方向）
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// 将 JSON Value 转为原始文本，交给上面的解析函数处理
///
/// 支持的输入类型：
/// - Number: 原样转为字符串
/// - String: 直接使用
/// - 其他: 空字符串
pub fn raw_text(v: Option<&Value>) -> String {
    match v {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}
