// ==========================================
// 制造驾驶舱 - 派生指标
// ==========================================
// 职责: OEE 分量、OEE 评估、良率结果、机台状态徽章
// 说明: 均为每次调用重新计算的值对象，不保存状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::types::{MachineStatus, OeeLevel, Severity};
use crate::format::number::to_fixed;

// ==========================================
// OeeComponents - OEE 分量
// ==========================================

/// OEE 分量（0–100 百分比刻度）
///
/// `oee = availability * performance * quality / 10000`，
/// 不做范围校验，越界输入原样传播到结果中。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeComponents {
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
}

// ==========================================
// OeeAssessment - OEE 评估
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OeeAssessment {
    pub level: OeeLevel,
    pub severity: Severity,
}

impl OeeAssessment {
    pub fn from_level(level: OeeLevel) -> Self {
        Self {
            level,
            severity: level.severity(),
        }
    }
}

// ==========================================
// YieldOutcome - 良率结果
// ==========================================

/// 良率计算结果
///
/// 产量为 0 时无法计算，由调用方决定展示方式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YieldOutcome {
    /// 已计算（百分比，未舍入）
    Computed { percent: f64 },
    /// 产量为 0，无法计算
    NotComputable,
}

impl YieldOutcome {
    pub fn percent(&self) -> Option<f64> {
        match self {
            YieldOutcome::Computed { percent } => Some(*percent),
            YieldOutcome::NotComputable => None,
        }
    }

    /// 保留一位小数的展示字符串；无法计算时返回 "0"
    pub fn display(&self) -> String {
        match self {
            YieldOutcome::Computed { percent } => to_fixed(*percent, 1),
            YieldOutcome::NotComputable => "0".to_string(),
        }
    }
}

impl fmt::Display for YieldOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

// ==========================================
// StatusBadge - 机台状态徽章
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub status: MachineStatus,
    pub severity: Severity,
    /// 本地化标签
    pub label: String,
}

impl StatusBadge {
    pub fn badge_class(&self) -> &'static str {
        self.severity.badge_class()
    }
}
