// ==========================================
// 制造驾驶舱 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，转换为面向页面的错误消息
// ==========================================

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::DomainError;
use crate::export::ExportError;
use crate::format::FormatError;
use crate::ui::UiError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    #[error("格式化失败: {0}")]
    FormatError(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("未知命令: {0}")]
    UnknownCommand(String),

    // ==========================================
    // 副作用错误
    // ==========================================
    #[error("页面操作失败: {0}")]
    UiError(String),

    #[error("导出失败: {0}")]
    ExportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}

impl From<FormatError> for ApiError {
    fn from(err: FormatError) -> Self {
        ApiError::FormatError(err.to_string())
    }
}

impl From<UiError> for ApiError {
    fn from(err: UiError) -> Self {
        match err {
            UiError::FormNotFound(form_id) => ApiError::NotFound(format!("表单(id={})不存在", form_id)),
            UiError::LockError(msg) => ApiError::InternalError(format!("锁获取失败: {}", msg)),
            other => ApiError::UiError(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::EmptyFilename | ExportError::InvalidFilename(_) => {
                ApiError::InvalidInput(err.to_string())
            }
            other => ApiError::ExportError(other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_not_found_conversion() {
        let api_err: ApiError = UiError::FormNotFound("inventoryForm".to_string()).into();
        match api_err {
            ApiError::NotFound(msg) => assert!(msg.contains("inventoryForm")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_export_filename_is_invalid_input() {
        let api_err: ApiError = ExportError::EmptyFilename.into();
        assert!(matches!(api_err, ApiError::InvalidInput(_)));

        let api_err: ApiError = ExportError::IoError("disk full".to_string()).into();
        match api_err {
            ApiError::ExportError(msg) => assert!(msg.contains("disk full")),
            other => panic!("Expected ExportError, got {:?}", other),
        }
    }

    #[test]
    fn test_domain_error_conversion() {
        let api_err: ApiError = DomainError::validation("raw_materials[0].stock", "数值不能为负").into();
        match api_err {
            ApiError::ValidationError(msg) => assert!(msg.contains("raw_materials[0].stock")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
