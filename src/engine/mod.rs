// ==========================================
// 制造驾驶舱 - 指标引擎层
// ==========================================
// 职责: OEE / 良率 / 机台状态 / 低库存预警
// 红线: 纯函数，不访问 UI、不保存状态
// ==========================================

pub mod inventory_alert;
pub mod machine_status;
pub mod oee;
pub mod production_yield;

pub use inventory_alert::{check_low_stock, check_low_stock_in, low_stock_items};
pub use machine_status::{machine_status_badge, machine_status_badge_in};
pub use oee::{assess_oee, calculate_oee_components, oee_assessment};
pub use production_yield::{calculate_production_yield, yield_badge, yield_badge_with};
