// ==========================================
// 制造驾驶舱 - UI 适配层错误类型
// ==========================================

use thiserror::Error;

/// UI 适配层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("表单不存在: {0}")]
    FormNotFound(String),

    #[error("通知容器不可用: {0}")]
    ContainerUnavailable(String),

    #[error("锁获取失败: {0}")]
    LockError(String),

    #[error("异步运行时不可用: {0}")]
    RuntimeUnavailable(String),
}

/// Result 类型别名
pub type UiResult<T> = Result<T, UiError>;
