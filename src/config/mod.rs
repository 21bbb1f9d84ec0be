// ==========================================
// 制造驾驶舱 - 配置层
// ==========================================
// 职责: 语言、等级阈值、通知与导出配置
// 存储: JSON 文件（可选），缺省使用内置默认值
// ==========================================

pub mod dashboard_config;
pub mod error;

// 重导出核心配置
pub use dashboard_config::{
    config_keys, resolve_config_path, DashboardConfig, ExportConfig, NotificationConfig,
    OeeThresholds, YieldThresholds, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE,
};
pub use error::{ConfigError, ConfigResult};
