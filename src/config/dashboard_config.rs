// ==========================================
// 制造驾驶舱 - 配置管理
// ==========================================
// 职责: 配置加载、默认值、校验
// 加载顺序:
//   1. 环境变量 MFG_DASHBOARD_CONFIG 指定的 JSON 文件
//   2. 工作目录下的 dashboard_config.json
//   3. 内置默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::error::{ConfigError, ConfigResult};
use crate::i18n;

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "MFG_DASHBOARD_CONFIG";

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "dashboard_config.json";

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const LOCALE: &str = "locale";

    // OEE 等级阈值
    pub const OEE_EXCELLENT: &str = "oee_thresholds.excellent";
    pub const OEE_GOOD: &str = "oee_thresholds.good";
    pub const OEE_FAIR: &str = "oee_thresholds.fair";

    // 良率徽章阈值
    pub const YIELD_SUCCESS: &str = "yield_thresholds.success";
    pub const YIELD_WARNING: &str = "yield_thresholds.warning";

    // 通知
    pub const NOTIFICATION_AUTO_DISMISS_MS: &str = "notification.auto_dismiss_ms";
    pub const NOTIFICATION_CONTAINER_SELECTOR: &str = "notification.container_selector";

    // 导出
    pub const EXPORT_DOWNLOAD_DIR: &str = "export.download_dir";
}

// ==========================================
// OeeThresholds - OEE 等级阈值（下界含）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OeeThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for OeeThresholds {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            good: 70.0,
            fair: 50.0,
        }
    }
}

// ==========================================
// YieldThresholds - 良率徽章阈值（下界含）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldThresholds {
    pub success: f64,
    pub warning: f64,
}

impl Default for YieldThresholds {
    fn default() -> Self {
        Self {
            success: 95.0,
            warning: 90.0,
        }
    }
}

// ==========================================
// NotificationConfig - 通知配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// 自动移除延迟（毫秒）
    pub auto_dismiss_ms: u64,
    /// 通知容器选择器
    pub container_selector: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
            container_selector: ".container".to_string(),
        }
    }
}

// ==========================================
// ExportConfig - 导出配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// 下载目录（为空时使用系统下载目录）
    pub download_dir: Option<PathBuf>,
}

// ==========================================
// DashboardConfig - 驾驶舱配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub locale: String,
    pub oee_thresholds: OeeThresholds,
    pub yield_thresholds: YieldThresholds,
    pub notification: NotificationConfig,
    pub export: ExportConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: i18n::DEFAULT_LOCALE.to_string(),
            oee_thresholds: OeeThresholds::default(),
            yield_thresholds: YieldThresholds::default(),
            notification: NotificationConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// 按加载顺序读取配置
    pub fn load() -> ConfigResult<Self> {
        let env_path = std::env::var(CONFIG_ENV_VAR).ok();
        match resolve_config_path(env_path.as_deref(), Path::new(DEFAULT_CONFIG_FILE)) {
            Some(path) => {
                tracing::info!("加载驾驶舱配置: {}", path.display());
                Self::load_from_path(&path)
            }
            None => {
                tracing::info!("未找到配置文件，使用内置默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 从指定路径读取配置
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    /// 从 JSON 字符串解析配置（缺省字段取默认值）
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 配置校验
    ///
    /// - 语言必须受支持
    /// - 阈值在 [0, 100] 内且严格递减
    /// - 通知延迟 > 0
    pub fn validate(&self) -> ConfigResult<()> {
        if !i18n::is_supported_locale(&self.locale) {
            return Err(invalid(
                config_keys::LOCALE,
                format!("不支持的语言: {}", self.locale),
            ));
        }

        let oee = &self.oee_thresholds;
        check_percent(config_keys::OEE_EXCELLENT, oee.excellent)?;
        check_percent(config_keys::OEE_GOOD, oee.good)?;
        check_percent(config_keys::OEE_FAIR, oee.fair)?;
        if !(oee.excellent > oee.good && oee.good > oee.fair) {
            return Err(invalid(
                config_keys::OEE_GOOD,
                format!(
                    "OEE 阈值必须递减: excellent={} good={} fair={}",
                    oee.excellent, oee.good, oee.fair
                ),
            ));
        }

        let yld = &self.yield_thresholds;
        check_percent(config_keys::YIELD_SUCCESS, yld.success)?;
        check_percent(config_keys::YIELD_WARNING, yld.warning)?;
        if yld.success <= yld.warning {
            return Err(invalid(
                config_keys::YIELD_WARNING,
                format!(
                    "良率阈值必须递减: success={} warning={}",
                    yld.success, yld.warning
                ),
            ));
        }

        if self.notification.auto_dismiss_ms == 0 {
            return Err(invalid(
                config_keys::NOTIFICATION_AUTO_DISMISS_MS,
                "自动移除延迟必须大于 0",
            ));
        }
        if self.notification.container_selector.trim().is_empty() {
            return Err(invalid(
                config_keys::NOTIFICATION_CONTAINER_SELECTOR,
                "通知容器选择器不能为空",
            ));
        }

        Ok(())
    }

    /// 通知自动移除延迟
    pub fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification.auto_dismiss_ms)
    }

    /// 下载目录: 配置值 → 系统下载目录 → 当前目录
    pub fn resolve_download_dir(&self) -> PathBuf {
        self.export
            .download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// 解析配置文件路径
///
/// 环境变量优先；否则在默认文件存在时使用默认文件
pub fn resolve_config_path(env_value: Option<&str>, default_file: &Path) -> Option<PathBuf> {
    if let Some(value) = env_value.map(str::trim).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value));
    }
    if default_file.exists() {
        return Some(default_file.to_path_buf());
    }
    None
}

fn check_percent(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(key, format!("百分比必须在 [0, 100] 内: {}", value)))
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}
