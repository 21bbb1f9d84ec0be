// ==========================================
// 制造驾驶舱 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 领域层错误类型（边界校验失败）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("字段校验失败 ({field}): {message}")]
    ValidationError { field: String, message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
