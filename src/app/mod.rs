// ==========================================
// 制造驾驶舱 - 应用层
// ==========================================
// 职责: 页面标记 → 命令分发 → 驾驶舱 API
// ==========================================

pub mod commands;
pub mod state;

// 重导出
pub use commands::{invoke, COMMAND_NAMES};
pub use state::AppState;
