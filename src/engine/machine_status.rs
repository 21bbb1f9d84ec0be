// ==========================================
// 制造驾驶舱 - 机台状态徽章
// ==========================================
// 全函数: 未知状态键 → 中性徽章（secondary / 未知）
// ==========================================

use crate::domain::metrics::StatusBadge;
use crate::domain::types::MachineStatus;
use crate::i18n;

/// 机台状态徽章（默认语言 id-ID）
pub fn machine_status_badge(status: &str) -> StatusBadge {
    machine_status_badge_in(status, i18n::DEFAULT_LOCALE)
}

/// 机台状态徽章（指定语言）
pub fn machine_status_badge_in(status: &str, locale: &str) -> StatusBadge {
    badge_for(MachineStatus::parse(status), locale)
}

/// 由已解析的状态生成徽章
pub fn badge_for(status: MachineStatus, locale: &str) -> StatusBadge {
    StatusBadge {
        status,
        severity: status.severity(),
        label: i18n::t_in(locale, status.label_key()),
    }
}
