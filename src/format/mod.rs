// ==========================================
// 制造驾驶舱 - 格式化层
// ==========================================
// 职责: 数字/日期的展示格式（印尼区域习惯）
// 红线: 纯函数，不访问 UI
// ==========================================

pub mod date;
pub mod error;
pub mod number;

pub use date::{current_date, format_date, format_date_or_placeholder, format_naive_date};
pub use error::{FormatError, FormatResult};
pub use number::{format_number, format_number_str, to_fixed};
