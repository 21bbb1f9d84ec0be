// ==========================================
// 制造驾驶舱 - 良率计算
// ==========================================
// 良率 = (产量 - 缺陷) / 产量 × 100
// 产量为 0 → NotComputable（不再返回数值哨兵）
// ==========================================

use crate::config::YieldThresholds;
use crate::domain::metrics::YieldOutcome;
use crate::domain::types::Severity;

/// 计算生产良率
///
/// # 参数
/// - quantity: 产量
/// - defects: 缺陷数（不校验是否超过产量）
pub fn calculate_production_yield(quantity: u64, defects: u64) -> YieldOutcome {
    if quantity == 0 {
        return YieldOutcome::NotComputable;
    }
    let q = quantity as f64;
    let d = defects as f64;
    YieldOutcome::Computed {
        percent: (q - d) / q * 100.0,
    }
}

/// 良率徽章（默认阈值 95 / 90）
pub fn yield_badge(yield_percent: f64) -> Severity {
    yield_badge_with(yield_percent, &YieldThresholds::default())
}

/// 良率徽章（指定阈值，下界含）
pub fn yield_badge_with(yield_percent: f64, thresholds: &YieldThresholds) -> Severity {
    if yield_percent >= thresholds.success {
        Severity::Success
    } else if yield_percent >= thresholds.warning {
        Severity::Warning
    } else {
        Severity::Danger
    }
}
