// ==========================================
// 制造驾驶舱 - 表单校验
// ==========================================
// 规则: 仅校验必填的 input / select 是否为空（去除空白后）
// 副作用: 空控件加 is-invalid，非空控件移除 is-invalid
// ==========================================

use crate::ui::error::{UiError, UiResult};
use crate::ui::page::INVALID_CLASS;
use crate::ui::surface::FormSurface;

/// 校验表单必填项
///
/// # 返回
/// - Ok(true): 全部必填项非空
/// - Ok(false): 存在空必填项（已标记）
/// - Err(UiError::FormNotFound): 表单不存在
pub fn validate_form(surface: &mut dyn FormSurface, form_id: &str) -> UiResult<bool> {
    let form = surface.find_form_mut(form_id).ok_or_else(|| {
        tracing::warn!("表单校验失败: 表单不存在 form_id={}", form_id);
        UiError::FormNotFound(form_id.to_string())
    })?;

    let mut is_valid = true;
    let mut invalid_count = 0usize;

    for control in form
        .controls
        .iter_mut()
        .filter(|c| c.required && c.tag.is_validated())
    {
        if control.is_blank() {
            control.add_class(INVALID_CLASS);
            is_valid = false;
            invalid_count += 1;
        } else {
            control.remove_class(INVALID_CLASS);
        }
    }

    tracing::debug!(
        "表单校验: form_id={}, valid={}, invalid_count={}",
        form_id,
        is_valid,
        invalid_count
    );
    Ok(is_valid)
}
