// ==========================================
// 制造驾驶舱 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("文件名不能为空")]
    EmptyFilename,

    #[error("文件名无效: {0}")]
    InvalidFilename(String),

    #[error("CSV 写入失败: {0}")]
    CsvWriteError(String),

    #[error("数据 URI 无效: {0}")]
    InvalidDataUri(String),

    #[error("文件写入失败: {0}")]
    IoError(String),
}

// 实现 From<csv::Error>
impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
