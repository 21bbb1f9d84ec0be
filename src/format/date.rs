// ==========================================
// 制造驾驶舱 - 日期格式化
// ==========================================
// 展示格式: DD/MM/YYYY（id-ID 区域）
// 当前日期: 本地时钟，ISO YYYY-MM-DD，不做时区归一
// ==========================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::format::error::{FormatError, FormatResult};
use crate::i18n;

/// 展示格式
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// ISO 日期格式
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// 解析日期输入
///
/// 支持:
/// - YYYY-MM-DD
/// - RFC 3339（取时间戳自身偏移下的日期）
/// - YYYY-MM-DDTHH:MM:SS / YYYY-MM-DD HH:MM:SS（可带小数秒）
pub fn parse_date_input(raw: &str) -> FormatResult<NaiveDate> {
    let input = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, ISO_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt.date());
        }
    }

    Err(FormatError::InvalidDate(raw.to_string()))
}

/// 格式化日期字符串为 DD/MM/YYYY
///
/// # 返回
/// - Ok(String): 格式化结果
/// - Err(FormatError::InvalidDate): 无法解析
pub fn format_date(raw: &str) -> FormatResult<String> {
    parse_date_input(raw).map(format_naive_date)
}

/// 格式化日期为 DD/MM/YYYY
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// 宽松格式化：无法解析时返回本地化的占位文本
pub fn format_date_or_placeholder(raw: &str, locale: &str) -> String {
    match format_date(raw) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::debug!("日期格式化回退占位文本: {}", e);
            i18n::t_in(locale, "common.invalid_date")
        }
    }
}

/// 当前日期（本地时钟，YYYY-MM-DD）
pub fn current_date() -> String {
    iso_date(Local::now().date_naive())
}

/// 日期转 ISO 字符串
pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
