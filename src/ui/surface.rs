// ==========================================
// 制造驾驶舱 - UI 平台能力 Trait
// ==========================================
// 职责: 定义辅助函数所需的页面读写接口（不包含实现）
// 实现者: Page（无头页面），或宿主页面的适配器
// ==========================================

use crate::ui::error::UiResult;
use crate::ui::page::{Form, Notification, NotificationId, PageElement};

/// 通知容器
pub trait NotificationSurface: Send {
    /// 插入到容器顶部
    fn insert_at_top(&mut self, notification: Notification) -> UiResult<()>;

    /// 移除通知；不存在时返回 false
    fn remove(&mut self, id: NotificationId) -> bool;

    /// 通知是否仍在容器中
    fn contains(&self, id: NotificationId) -> bool;
}

/// 表单查询
pub trait FormSurface {
    /// 按 ID 查找表单
    fn find_form_mut(&mut self, form_id: &str) -> Option<&mut Form>;
}

/// UI 工具包的提示框组件
pub trait TooltipActivator {
    /// 在元素上激活提示框
    fn activate(&mut self, element: &PageElement);
}
