// ==========================================
// 制造驾驶舱 - OEE 计算
// ==========================================
// OEE = 可用率 × 性能 × 质量（0–100 刻度）
// 说明: 不做范围校验，越界值原样进入结果
// ==========================================

use crate::config::OeeThresholds;
use crate::domain::metrics::{OeeAssessment, OeeComponents};
use crate::domain::types::OeeLevel;

/// 计算 OEE 分量
///
/// # 参数
/// - availability / performance / quality: 0–100 百分比
///
/// # 返回
/// 回显三项输入，并给出 `oee = a * p * q / 10000`
pub fn calculate_oee_components(availability: f64, performance: f64, quality: f64) -> OeeComponents {
    OeeComponents {
        availability,
        performance,
        quality,
        oee: (availability * performance * quality) / 10000.0,
    }
}

/// OEE 评估（默认阈值 85 / 70 / 50）
pub fn oee_assessment(oee_percent: f64) -> OeeAssessment {
    assess_oee(oee_percent, &OeeThresholds::default())
}

/// OEE 评估（指定阈值，下界含）
pub fn assess_oee(oee_percent: f64, thresholds: &OeeThresholds) -> OeeAssessment {
    let level = if oee_percent >= thresholds.excellent {
        OeeLevel::Excellent
    } else if oee_percent >= thresholds.good {
        OeeLevel::Good
    } else if oee_percent >= thresholds.fair {
        OeeLevel::Fair
    } else {
        OeeLevel::Poor
    };
    OeeAssessment::from_level(level)
}
