// ==========================================
// 制造驾驶舱 - 数字格式化
// ==========================================
// 区域: id-ID（千分位 "."，小数点 ","）
// 小数: 最多 3 位，半数远离零舍入，去除末尾 0
// ==========================================

use crate::format::error::{FormatError, FormatResult};

/// 千分位分隔符
pub const GROUP_SEPARATOR: char = '.';

/// 小数点
pub const DECIMAL_SEPARATOR: char = ',';

/// 最大小数位数
pub const MAX_FRACTION_DIGITS: usize = 3;

/// 格式化数字（id-ID 区域）
///
/// # 示例
/// ```
/// use manufacturing_dashboard::format::format_number;
/// assert_eq!(format_number(1234567.891), "1.234.567,891");
/// assert_eq!(format_number(15000.0), "15.000");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = to_fixed(value.abs(), MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + 4);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

/// 解析数字字符串后格式化（供页面标记传入文本使用）
pub fn format_number_str(raw: &str) -> FormatResult<String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidNumber(raw.to_string()))?;
    Ok(format_number(value))
}

/// 固定小数位（与浏览器 toFixed 一致: 平局取较大值）
///
/// # 示例
/// ```
/// use manufacturing_dashboard::format::to_fixed;
/// assert_eq!(to_fixed(99.25, 1), "99.3");
/// assert_eq!(to_fixed(98.0, 1), "98.0");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let factor = 10f64.powi(digits as i32);
    let scaled = (value * factor + 0.5).floor();
    format!("{:.*}", digits, scaled / factor)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
