// ==========================================
// 制造驾驶舱 - 无头页面模型
// ==========================================
// 职责: 以内存结构表示页面中被辅助函数读写的部分
// - 通知容器（顶部插入）
// - 表单与控件（is-invalid 标记）
// - 携带 data-* 属性的元素（提示框初始化）
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use uuid::Uuid;

use crate::domain::types::NotificationKind;
use crate::ui::error::{UiError, UiResult};
use crate::ui::surface::{FormSurface, NotificationSurface};

/// 校验失败标记类名
pub const INVALID_CLASS: &str = "is-invalid";

// ==========================================
// 表单控件
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlTag {
    Input,
    Select,
    Textarea,
}

impl ControlTag {
    /// 是否参与必填校验（仅 input / select）
    pub fn is_validated(&self) -> bool {
        matches!(self, ControlTag::Input | ControlTag::Select)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormControl {
    pub name: String,
    pub tag: ControlTag,
    pub required: bool,
    pub value: String,
    #[serde(default)]
    classes: BTreeSet<String>,
}

impl FormControl {
    pub fn new(name: &str, tag: ControlTag) -> Self {
        Self {
            name: name.to_string(),
            tag,
            required: false,
            value: String::new(),
            classes: BTreeSet::new(),
        }
    }

    pub fn input(name: &str) -> Self {
        Self::new(name, ControlTag::Input)
    }

    pub fn select(name: &str) -> Self {
        Self::new(name, ControlTag::Select)
    }

    pub fn textarea(name: &str) -> Self {
        Self::new(name, ControlTag::Textarea)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// 去除空白后为空
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn is_marked_invalid(&self) -> bool {
        self.has_class(INVALID_CLASS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    pub controls: Vec<FormControl>,
}

impl Form {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            controls: Vec::new(),
        }
    }

    pub fn with_control(mut self, control: FormControl) -> Self {
        self.controls.push(control);
        self
    }

    pub fn control(&self, name: &str) -> Option<&FormControl> {
        self.controls.iter().find(|c| c.name == name)
    }

    pub fn control_mut(&mut self, name: &str) -> Option<&mut FormControl> {
        self.controls.iter_mut().find(|c| c.name == name)
    }
}

// ==========================================
// 通知
// ==========================================

/// 通知元素 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 可关闭的通知
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationKind) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.to_string(),
        }
    }

    /// 元素类名
    pub fn class_name(&self) -> String {
        format!("alert {} alert-dismissible fade show", self.kind.alert_class())
    }

    /// 渲染为 HTML 片段（消息文本转义）
    pub fn render_html(&self, close_label: &str) -> String {
        format!(
            "<div class=\"{}\" role=\"alert\" data-notification-id=\"{}\">{}<button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\" aria-label=\"{}\"></button></div>",
            self.class_name(),
            self.id,
            escape_html(&self.message),
            escape_html(close_label),
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// ==========================================
// 普通元素（data-* 属性）
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageElement {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

impl PageElement {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

// ==========================================
// Page - 无头页面
// ==========================================

#[derive(Debug, Clone)]
pub struct Page {
    container_selector: String,
    container_present: bool,
    /// 顶部在前
    notifications: Vec<Notification>,
    forms: Vec<Form>,
    elements: Vec<PageElement>,
}

impl Page {
    /// 创建带通知容器的页面
    pub fn new(container_selector: &str) -> Self {
        Self {
            container_selector: container_selector.to_string(),
            container_present: true,
            notifications: Vec::new(),
            forms: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// 创建不含通知容器的页面
    pub fn without_container(container_selector: &str) -> Self {
        Self {
            container_present: false,
            ..Self::new(container_selector)
        }
    }

    pub fn container_selector(&self) -> &str {
        &self.container_selector
    }

    pub fn add_form(&mut self, form: Form) {
        self.forms.push(form);
    }

    pub fn add_element(&mut self, element: PageElement) {
        self.elements.push(element);
    }

    pub fn form(&self, form_id: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.id == form_id)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    /// 按属性值筛选元素（文档顺序）
    pub fn elements_with_attribute<'a>(
        &'a self,
        name: &'a str,
        value: &'a str,
    ) -> impl Iterator<Item = &'a PageElement> + 'a {
        self.elements
            .iter()
            .filter(move |e| e.attribute(name) == Some(value))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(".container")
    }
}

impl NotificationSurface for Page {
    fn insert_at_top(&mut self, notification: Notification) -> UiResult<()> {
        if !self.container_present {
            return Err(UiError::ContainerUnavailable(self.container_selector.clone()));
        }
        self.notifications.insert(0, notification);
        Ok(())
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    fn contains(&self, id: NotificationId) -> bool {
        self.notifications.iter().any(|n| n.id == id)
    }
}

impl FormSurface for Page {
    fn find_form_mut(&mut self, form_id: &str) -> Option<&mut Form> {
        self.forms.iter_mut().find(|f| f.id == form_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_top_order() {
        let mut page = Page::default();
        let first = Notification::new("pertama", NotificationKind::Info);
        let second = Notification::new("kedua", NotificationKind::Success);
        let first_id = first.id;

        page.insert_at_top(first).unwrap();
        page.insert_at_top(second).unwrap();

        assert_eq!(page.notifications()[0].message, "kedua");
        assert_eq!(page.notifications()[1].message, "pertama");

        assert!(page.remove(first_id));
        assert!(!page.remove(first_id));
        assert_eq!(page.notifications().len(), 1);
    }

    #[test]
    fn test_missing_container() {
        let mut page = Page::without_container(".container");
        let result = page.insert_at_top(Notification::new("x", NotificationKind::Info));
        assert_eq!(result, Err(UiError::ContainerUnavailable(".container".to_string())));
    }

    #[test]
    fn test_render_html_escapes_message() {
        let notification = Notification::new("<b>Stok</b> & \"A\"", NotificationKind::Error);
        let html = notification.render_html("Tutup");
        assert!(html.contains("alert alert-danger alert-dismissible fade show"));
        assert!(html.contains("&lt;b&gt;Stok&lt;/b&gt; &amp; &quot;A&quot;"));
        assert!(html.contains("data-bs-dismiss=\"alert\""));
    }

    #[test]
    fn test_control_classes() {
        let mut control = FormControl::input("qty").required();
        assert!(!control.is_marked_invalid());
        control.add_class(INVALID_CLASS);
        assert!(control.is_marked_invalid());
        control.remove_class(INVALID_CLASS);
        assert!(!control.is_marked_invalid());
    }

    #[test]
    fn test_elements_with_attribute() {
        let mut page = Page::default();
        page.add_element(PageElement::new("a").with_attribute("data-bs-toggle", "tooltip"));
        page.add_element(PageElement::new("b").with_attribute("data-bs-toggle", "modal"));
        page.add_element(PageElement::new("c").with_attribute("data-bs-toggle", "tooltip"));

        let ids: Vec<&str> = page
            .elements_with_attribute("data-bs-toggle", "tooltip")
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
