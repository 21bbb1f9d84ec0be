// ==========================================
// 制造驾驶舱 - 页面命令（按域拆分）
// ==========================================
// 职责: 按页面脚本中的全局函数名分发命令
// 参数与返回值均为 JSON 字符串
// ==========================================

mod common;
mod metrics;
mod page;

pub use common::ErrorResponse;
pub use metrics::*;
pub use page::*;

use serde_json::Value;

use crate::api::ApiError;
use crate::app::state::AppState;

use common::map_api_error;

/// 可用命令（页面全局函数名）
pub const COMMAND_NAMES: &[&str] = &[
    "formatNumber",
    "formatDate",
    "getCurrentDate",
    "calculateOEEComponents",
    "getOEEAssessment",
    "calculateProductionYield",
    "getYieldBadgeClass",
    "getMachineStatusBadge",
    "checkLowStock",
    "validateForm",
    "showNotification",
    "exportToCSV",
];

/// 分发命令
///
/// # 参数
/// - command: 全局函数名（如 "formatNumber"）
/// - args: JSON 对象字符串（空串视为无参数）
///
/// # 返回
/// - Ok(String): 结果 JSON
/// - Err(String): ErrorResponse JSON
pub fn invoke(state: &AppState, command: &str, args: &str) -> Result<String, String> {
    let args: Value = if args.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(args).map_err(|e| {
            map_api_error(ApiError::InvalidInput(format!("参数不是合法 JSON: {}", e)))
        })?
    };

    tracing::debug!("invoke: command={}", command);

    match command {
        "formatNumber" => format_number(state, args),
        "formatDate" => format_date(state, args),
        "getCurrentDate" => get_current_date(state, args),
        "calculateOEEComponents" => calculate_oee_components(state, args),
        "getOEEAssessment" => get_oee_assessment(state, args),
        "calculateProductionYield" => calculate_production_yield(state, args),
        "getYieldBadgeClass" => get_yield_badge_class(state, args),
        "getMachineStatusBadge" => get_machine_status_badge(state, args),
        "checkLowStock" => check_low_stock(state, args),
        "validateForm" => validate_form(state, args),
        "showNotification" => show_notification(state, args),
        "exportToCSV" => export_to_csv(state, args),
        _ => {
            tracing::warn!("未知命令: {}", command);
            Err(map_api_error(ApiError::UnknownCommand(command.to_string())))
        }
    }
}
