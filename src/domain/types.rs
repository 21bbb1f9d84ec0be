// ==========================================
// 制造驾驶舱 - 领域类型定义
// ==========================================
// 职责: 徽章严重度、机台状态、通知类型、OEE 等级
// 红线: 查表类映射必须是全函数（未知键落到显式的 Unknown/默认分支）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 显示严重度 (Severity)
// ==========================================
// 对应前端样式: bg-* 徽章 / alert-* 提示框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,   // 正常/良好
    Warning,   // 关注
    Danger,    // 危险
    Info,      // 提示
    Secondary, // 中性（未知）
}

impl Severity {
    /// 徽章样式类名（bg-*）
    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::Success => "bg-success",
            Severity::Warning => "bg-warning",
            Severity::Danger => "bg-danger",
            Severity::Info => "bg-info",
            Severity::Secondary => "bg-secondary",
        }
    }

    /// 提示框样式类名（alert-*）
    pub fn alert_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Warning => "alert-warning",
            Severity::Danger => "alert-danger",
            Severity::Info => "alert-info",
            Severity::Secondary => "alert-secondary",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
            Severity::Info => write!(f, "info"),
            Severity::Secondary => write!(f, "secondary"),
        }
    }
}

// ==========================================
// 机台状态 (Machine Status)
// ==========================================
// 状态键: running / maintenance / stopped，其余一律 Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    Running,     // 运行中
    Maintenance, // 维护
    Stopped,     // 停机
    #[serde(other)]
    Unknown,     // 未知
}

impl MachineStatus {
    /// 从状态键解析（区分大小写，未知键 → Unknown）
    pub fn parse(key: &str) -> Self {
        match key {
            "running" => MachineStatus::Running,
            "maintenance" => MachineStatus::Maintenance,
            "stopped" => MachineStatus::Stopped,
            _ => MachineStatus::Unknown,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            MachineStatus::Running => Severity::Success,
            MachineStatus::Maintenance => Severity::Warning,
            MachineStatus::Stopped => Severity::Danger,
            MachineStatus::Unknown => Severity::Secondary,
        }
    }

    /// 标签的 i18n 键
    pub fn label_key(&self) -> &'static str {
        match self {
            MachineStatus::Running => "machine_status.running",
            MachineStatus::Maintenance => "machine_status.maintenance",
            MachineStatus::Stopped => "machine_status.stopped",
            MachineStatus::Unknown => "machine_status.unknown",
        }
    }
}

impl From<&str> for MachineStatus {
    fn from(key: &str) -> Self {
        MachineStatus::parse(key)
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineStatus::Running => write!(f, "running"),
            MachineStatus::Maintenance => write!(f, "maintenance"),
            MachineStatus::Stopped => write!(f, "stopped"),
            MachineStatus::Unknown => write!(f, "unknown"),
        }
    }
}

// ==========================================
// 通知类型 (Notification Kind)
// ==========================================
// 未识别的类型按 Info 处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    #[serde(other)]
    Info,
}

impl NotificationKind {
    pub fn parse(key: &str) -> Self {
        match key {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            "warning" => NotificationKind::Warning,
            _ => NotificationKind::Info,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            NotificationKind::Success => Severity::Success,
            NotificationKind::Error => Severity::Danger,
            NotificationKind::Warning => Severity::Warning,
            NotificationKind::Info => Severity::Info,
        }
    }

    /// 提示框样式类名
    pub fn alert_class(&self) -> &'static str {
        self.severity().alert_class()
    }
}

impl From<&str> for NotificationKind {
    fn from(key: &str) -> Self {
        NotificationKind::parse(key)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Info => write!(f, "info"),
        }
    }
}

// ==========================================
// OEE 等级 (OEE Level)
// ==========================================
// 顺序: Poor < Fair < Good < Excellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OeeLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl OeeLevel {
    pub fn severity(&self) -> Severity {
        match self {
            OeeLevel::Excellent => Severity::Success,
            OeeLevel::Good => Severity::Warning,
            OeeLevel::Fair => Severity::Info,
            OeeLevel::Poor => Severity::Danger,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            OeeLevel::Excellent => "oee.excellent",
            OeeLevel::Good => "oee.good",
            OeeLevel::Fair => "oee.fair",
            OeeLevel::Poor => "oee.poor",
        }
    }
}

impl fmt::Display for OeeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OeeLevel::Excellent => write!(f, "Excellent"),
            OeeLevel::Good => write!(f, "Good"),
            OeeLevel::Fair => write!(f, "Fair"),
            OeeLevel::Poor => write!(f, "Poor"),
        }
    }
}
