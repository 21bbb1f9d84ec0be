// ==========================================
// 制造驾驶舱 - 通知显示
// ==========================================
// 行为:
// - 通知插入容器顶部，可手动关闭
// - 固定延迟后自动移除（仅当仍在容器中）
// - 定时器不可取消；多条通知累积，不去重、不限量
// ==========================================

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::domain::types::NotificationKind;
use crate::ui::error::{UiError, UiResult};
use crate::ui::page::{Notification, NotificationId};
use crate::ui::surface::NotificationSurface;

/// 默认自动移除延迟
pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_secs(5);

// ==========================================
// NotificationCenter - 通知中心
// ==========================================
pub struct NotificationCenter<S: NotificationSurface + 'static> {
    surface: Arc<Mutex<S>>,
    auto_dismiss: Duration,
}

impl<S: NotificationSurface + 'static> NotificationCenter<S> {
    /// 创建通知中心
    ///
    /// # 参数
    /// - surface: 通知容器（共享）
    /// - auto_dismiss: 自动移除延迟
    pub fn new(surface: Arc<Mutex<S>>, auto_dismiss: Duration) -> Self {
        Self {
            surface,
            auto_dismiss,
        }
    }

    /// 使用配置中的延迟创建
    pub fn from_config(surface: Arc<Mutex<S>>, config: &DashboardConfig) -> Self {
        Self::new(surface, config.notification_delay())
    }

    pub fn auto_dismiss(&self) -> Duration {
        self.auto_dismiss
    }

    pub fn surface(&self) -> &Arc<Mutex<S>> {
        &self.surface
    }

    /// 显示通知（类型字符串，未识别时按 info）
    pub fn show(&self, message: &str, kind: &str) -> UiResult<NotificationId> {
        self.show_kind(message, NotificationKind::parse(kind))
    }

    /// 显示通知
    ///
    /// 需在 tokio 运行时内调用（自动移除定时器）
    pub fn show_kind(&self, message: &str, kind: NotificationKind) -> UiResult<NotificationId> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| UiError::RuntimeUnavailable(e.to_string()))?;

        let notification = Notification::new(message, kind);
        let id = notification.id;

        {
            let mut surface = self
                .surface
                .lock()
                .map_err(|e| UiError::LockError(e.to_string()))?;
            surface.insert_at_top(notification)?;
        }
        tracing::debug!("通知已显示: id={}, kind={}", id, kind);

        let surface = Arc::clone(&self.surface);
        let delay = self.auto_dismiss;
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            match surface.lock() {
                Ok(mut guard) => {
                    if guard.contains(id) {
                        guard.remove(id);
                        tracing::debug!("通知自动移除: id={}", id);
                    }
                }
                Err(e) => tracing::warn!("通知自动移除失败: id={}, error={}", id, e),
            }
        });

        Ok(id)
    }

    /// 手动关闭通知；已移除时返回 false
    pub fn dismiss(&self, id: NotificationId) -> UiResult<bool> {
        let mut surface = self
            .surface
            .lock()
            .map_err(|e| UiError::LockError(e.to_string()))?;
        Ok(surface.remove(id))
    }
}
