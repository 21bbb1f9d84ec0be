// ==========================================
// 制造驾驶舱 - 领域层
// ==========================================
// 职责: 值对象与类型定义（无副作用）
// ==========================================

pub mod error;
pub mod inventory;
pub mod metrics;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use inventory::{InventoryItem, InventorySnapshot};
pub use metrics::{OeeAssessment, OeeComponents, StatusBadge, YieldOutcome};
pub use types::{MachineStatus, NotificationKind, OeeLevel, Severity};
