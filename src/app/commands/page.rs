use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::state::AppState;
use crate::domain::types::NotificationKind;

use super::common::{cell_to_string, map_api_error, parse_args, to_json};

// ==========================================
// 页面操作与导出命令
// ==========================================

#[derive(Deserialize)]
struct ValidateFormArgs {
    form_id: String,
}

#[derive(Deserialize)]
struct ShowNotificationArgs {
    message: String,
    #[serde(default)]
    kind: NotificationKind,
}

#[derive(Deserialize)]
struct ExportCsvArgs {
    data: Vec<Vec<Value>>,
    filename: String,
}

/// 表单校验
pub fn validate_form(state: &AppState, args: Value) -> Result<String, String> {
    let args: ValidateFormArgs = parse_args("validateForm", args)?;
    let valid = state
        .dashboard_api
        .validate_form(&args.form_id)
        .map_err(map_api_error)?;
    to_json(&valid)
}

/// 显示通知（需在 tokio 运行时内调用）
pub fn show_notification(state: &AppState, args: Value) -> Result<String, String> {
    let args: ShowNotificationArgs = parse_args("showNotification", args)?;
    let id = state
        .dashboard_api
        .show_notification_kind(&args.message, args.kind)
        .map_err(map_api_error)?;
    to_json(&json!({ "id": id.to_string() }))
}

/// 导出 CSV
pub fn export_to_csv(state: &AppState, args: Value) -> Result<String, String> {
    let args: ExportCsvArgs = parse_args("exportToCSV", args)?;
    let rows: Vec<Vec<String>> = args
        .data
        .iter()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    let request = state
        .dashboard_api
        .export_to_csv(&rows, &args.filename)
        .map_err(map_api_error)?;
    to_json(&request)
}
