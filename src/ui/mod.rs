// ==========================================
// 制造驾驶舱 - UI 适配层
// ==========================================
// 职责: 有副作用的页面操作（通知、表单校验、提示框）
// 红线: 与 format / engine 纯函数分离，所有页面读写经由 surface Trait
// ==========================================

pub mod error;
pub mod form;
pub mod notification;
pub mod page;
pub mod surface;
pub mod tooltip;

pub use error::{UiError, UiResult};
pub use form::validate_form;
pub use notification::{NotificationCenter, DEFAULT_AUTO_DISMISS};
pub use page::{
    ControlTag, Form, FormControl, Notification, NotificationId, Page, PageElement, INVALID_CLASS,
};
pub use surface::{FormSurface, NotificationSurface, TooltipActivator};
pub use tooltip::init_tooltips;
