// ==========================================
// 制造驾驶舱 - 数据 URI 编解码
// ==========================================
// 编码规则与浏览器 encodeURI 一致:
// 保留 A-Z a-z 0-9 与 ;,/?:@&=+$-_.!~*'()#，其余按 UTF-8 字节 %XX 编码
// ==========================================

use crate::export::error::{ExportError, ExportResult};

/// CSV 数据 URI 前缀
pub const CSV_DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

const URI_UNESCAPED: &[u8] = b";,/?:@&=+$-_.!~*'()#";

/// 生成 CSV 数据 URI
pub fn csv_data_uri(content: &str) -> String {
    encode_uri(&format!("{}{}", CSV_DATA_URI_PREFIX, content))
}

/// encodeURI 语义的百分号编码
pub fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric() || URI_UNESCAPED.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// 百分号解码
pub fn decode_uri(input: &str) -> ExportResult<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let hex = input
                .get(idx + 1..idx + 3)
                .ok_or_else(|| ExportError::InvalidDataUri(format!("截断的转义序列 (位置 {})", idx)))?;
            let value = u8::from_str_radix(hex, 16)
                .map_err(|_| ExportError::InvalidDataUri(format!("非法转义序列: %{}", hex)))?;
            out.push(value);
            idx += 3;
        } else {
            out.push(bytes[idx]);
            idx += 1;
        }
    }
    String::from_utf8(out).map_err(|e| ExportError::InvalidDataUri(e.to_string()))
}

/// 解析数据 URI，返回 (媒体类型, 解码后的内容)
pub fn parse_data_uri(uri: &str) -> ExportResult<(String, String)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| ExportError::InvalidDataUri("缺少 data: 前缀".to_string()))?;
    let (media_type, payload) = rest
        .split_once(',')
        .ok_or_else(|| ExportError::InvalidDataUri("缺少 ',' 分隔符".to_string()))?;
    Ok((media_type.to_string(), decode_uri(payload)?))
}
