use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::state::AppState;
use crate::domain::inventory::InventorySnapshot;

use super::common::{map_api_error, parse_args, to_json};

// ==========================================
// 格式化与指标命令
// ==========================================

#[derive(Deserialize)]
struct FormatNumberArgs {
    num: NumberInput,
}

/// 数字或数字文本（页面标记可能传入字符串）
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberInput {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
struct FormatDateArgs {
    date: String,
}

#[derive(Deserialize)]
struct OeeComponentsArgs {
    availability: f64,
    performance: f64,
    quality: f64,
}

#[derive(Deserialize)]
struct OeeAssessmentArgs {
    oee_percent: f64,
}

#[derive(Deserialize)]
struct ProductionYieldArgs {
    quantity: u64,
    defects: u64,
}

#[derive(Deserialize)]
struct YieldBadgeArgs {
    yield_percent: f64,
}

#[derive(Deserialize)]
struct MachineStatusArgs {
    status: String,
}

#[derive(Deserialize)]
struct LowStockArgs {
    inventory: InventorySnapshot,
}

/// 数字格式化
pub fn format_number(state: &AppState, args: Value) -> Result<String, String> {
    let args: FormatNumberArgs = parse_args("formatNumber", args)?;
    let result = match args.num {
        NumberInput::Number(value) => state.dashboard_api.format_number(value),
        NumberInput::Text(raw) => state
            .dashboard_api
            .format_number_str(&raw)
            .map_err(map_api_error)?,
    };
    to_json(&result)
}

/// 日期格式化
pub fn format_date(state: &AppState, args: Value) -> Result<String, String> {
    let args: FormatDateArgs = parse_args("formatDate", args)?;
    let result = state
        .dashboard_api
        .format_date(&args.date)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 当前日期
pub fn get_current_date(state: &AppState, _args: Value) -> Result<String, String> {
    to_json(&state.dashboard_api.current_date())
}

/// OEE 分量
pub fn calculate_oee_components(state: &AppState, args: Value) -> Result<String, String> {
    let args: OeeComponentsArgs = parse_args("calculateOEEComponents", args)?;
    let result = state.dashboard_api.calculate_oee_components(
        args.availability,
        args.performance,
        args.quality,
    );
    to_json(&result)
}

/// OEE 评估
pub fn get_oee_assessment(state: &AppState, args: Value) -> Result<String, String> {
    let args: OeeAssessmentArgs = parse_args("getOEEAssessment", args)?;
    let assessment = state.dashboard_api.oee_assessment(args.oee_percent);
    to_json(&json!({
        "class": assessment.severity.badge_class(),
        "level": assessment.level.to_string(),
    }))
}

/// 生产良率
pub fn calculate_production_yield(state: &AppState, args: Value) -> Result<String, String> {
    let args: ProductionYieldArgs = parse_args("calculateProductionYield", args)?;
    let outcome = state
        .dashboard_api
        .calculate_production_yield(args.quantity, args.defects);
    to_json(&json!({
        "outcome": outcome,
        "display": outcome.display(),
    }))
}

/// 良率徽章
pub fn get_yield_badge_class(state: &AppState, args: Value) -> Result<String, String> {
    let args: YieldBadgeArgs = parse_args("getYieldBadgeClass", args)?;
    to_json(&state.dashboard_api.yield_badge(args.yield_percent).badge_class())
}

/// 机台状态徽章
pub fn get_machine_status_badge(state: &AppState, args: Value) -> Result<String, String> {
    let args: MachineStatusArgs = parse_args("getMachineStatusBadge", args)?;
    let badge = state.dashboard_api.machine_status_badge(&args.status);
    to_json(&json!({
        "class": badge.badge_class(),
        "text": badge.label,
    }))
}

/// 低库存预警
pub fn check_low_stock(state: &AppState, args: Value) -> Result<String, String> {
    let args: LowStockArgs = parse_args("checkLowStock", args)?;
    let alerts = state
        .dashboard_api
        .check_low_stock(&args.inventory)
        .map_err(map_api_error)?;
    to_json(&alerts)
}
