// ==========================================
// 制造驾驶舱 - 提示框初始化
// ==========================================
// 页面加载完成后，对所有 data-bs-toggle="tooltip" 的元素激活提示框
// ==========================================

use crate::ui::page::Page;
use crate::ui::surface::TooltipActivator;

pub const TOOLTIP_TOGGLE_ATTR: &str = "data-bs-toggle";
pub const TOOLTIP_TOGGLE_VALUE: &str = "tooltip";

/// 初始化提示框，返回激活数量
pub fn init_tooltips(page: &Page, activator: &mut dyn TooltipActivator) -> usize {
    let mut count = 0;
    for element in page.elements_with_attribute(TOOLTIP_TOGGLE_ATTR, TOOLTIP_TOGGLE_VALUE) {
        activator.activate(element);
        count += 1;
    }
    tracing::debug!("提示框初始化: {}个", count);
    count
}
