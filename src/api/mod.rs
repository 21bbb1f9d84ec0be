// ==========================================
// 制造驾驶舱 - API 层
// ==========================================
// 职责: 对页面标记暴露的业务接口
// ==========================================

pub mod dashboard_api;
pub mod error;

pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
