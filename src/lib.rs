// ==========================================
// 制造驾驶舱 - 前端辅助核心库
// ==========================================
// 职责: 数字/日期格式化、OEE 与良率计算、徽章映射、
//       低库存预警、通知显示、表单校验、CSV 导出
// 分层: 纯函数（format / engine）与副作用适配（ui / export）分离
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "id-ID");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与类型
pub mod domain;

// 格式化层 - 数字/日期
pub mod format;

// 引擎层 - 指标计算与映射
pub mod engine;

// UI 适配层 - 通知/表单/提示框
pub mod ui;

// 导出层 - CSV 与下载
pub mod export;

// 配置层 - 驾驶舱配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 命令分发
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    InventoryItem, InventorySnapshot, MachineStatus, NotificationKind, OeeAssessment,
    OeeComponents, OeeLevel, Severity, StatusBadge, YieldOutcome,
};

// 纯函数
pub use engine::{
    calculate_oee_components, calculate_production_yield, check_low_stock, machine_status_badge,
    oee_assessment, yield_badge,
};
pub use format::{current_date, format_date, format_number};

// 副作用适配
pub use export::{export_to_csv, DownloadSink, FileDownloadSink, MemoryDownloadSink};
pub use ui::{validate_form, NotificationCenter, Page};

// API
pub use api::{ApiError, ApiResult, DashboardApi};
pub use config::DashboardConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Manufacturing Dashboard";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
