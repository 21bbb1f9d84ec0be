// ==========================================
// 制造驾驶舱 - 格式化层错误类型
// ==========================================

use thiserror::Error;

/// 格式化错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("日期无法解析: {0}（支持 YYYY-MM-DD / RFC 3339 / YYYY-MM-DD HH:MM:SS）")]
    InvalidDate(String),

    #[error("数值无法解析: {0}")]
    InvalidNumber(String),
}

/// Result 类型别名
pub type FormatResult<T> = Result<T, FormatError>;
